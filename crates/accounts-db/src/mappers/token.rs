//! Token entity <-> model mapper

use accounts_core::entities::Token;
use accounts_core::value_objects::{TokenId, UserId};

use crate::models::TokenModel;

/// Convert TokenModel to Token entity
impl From<TokenModel> for Token {
    fn from(model: TokenModel) -> Self {
        Token {
            id: TokenId::new(model.id),
            user_id: UserId::new(model.user_id),
            token: model.token,
            created_at: model.created_at,
            used_at: model.used_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_model_to_entity() {
        let now = Utc::now();
        let model = TokenModel {
            id: 3,
            user_id: 8,
            token: "004211".to_string(),
            created_at: now,
            used_at: Some(now),
        };

        let token = Token::from(model);
        assert_eq!(token.id, TokenId::new(3));
        assert_eq!(token.user_id, UserId::new(8));
        assert_eq!(token.token, "004211");
        assert!(token.is_used());
    }
}
