//! User entity <-> model mapper

use accounts_core::entities::User;
use accounts_core::value_objects::UserId;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            joined_at: model.joined_at,
            is_active: model.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_model_to_entity() {
        let joined_at = Utc::now();
        let user = User::from(UserModel {
            id: 5,
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            joined_at,
            is_active: false,
        });

        assert_eq!(user.id, UserId::new(5));
        assert_eq!(user.full_name(), "Grace Hopper");
        assert_eq!(user.joined_at, joined_at);
        assert!(!user.is_active);
    }
}
