use crate::application::error::{ApplicationError, ApplicationResult};

pub(super) const MIN_PASSWORD_LENGTH: usize = 12;

/// Policy applied to the seeded administrator's password.
pub(super) fn validate_password(password: &str) -> ApplicationResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApplicationError::validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    let missing: Vec<&str> = [
        (password.chars().any(char::is_uppercase), "an uppercase letter"),
        (password.chars().any(char::is_lowercase), "a lowercase letter"),
        (password.chars().any(|c| c.is_ascii_digit()), "a digit"),
        (password.chars().any(|c| !c.is_alphanumeric()), "a symbol"),
    ]
    .into_iter()
    .filter_map(|(present, label)| (!present).then_some(label))
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApplicationError::validation(format!(
            "password needs {}",
            missing.join(" and ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_mixed_password() {
        assert!(validate_password("Bootstrap-pass9!").is_ok());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(validate_password("Ää1!ääääää").is_err());
    }

    #[test]
    fn names_every_missing_class() {
        match validate_password("lowercaseonly") {
            Err(ApplicationError::Validation(msg)) => {
                assert_eq!(
                    msg,
                    "password needs an uppercase letter and a digit and a symbol"
                );
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
