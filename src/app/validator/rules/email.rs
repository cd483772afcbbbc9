use crate::core::validator::rules::email as core_email;

pub struct Email;

impl Email {
    pub fn apply(value: &str) -> bool {
        core_email::Email::apply(value)
    }

    pub fn validate(value: &str, attribute_name: &str) -> Vec<String> {
        let mut v: Vec<String> = Vec::new();
        if !Self::apply(value) {
            v.push(format!(
                "The {} must be a valid email address.",
                attribute_name
            ));
        }
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply() {
        // RUSTFLAGS=-Awarnings CARGO_INCREMENTAL=0 cargo test -- --nocapture --exact app::validator::rules::email::tests::apply
        assert_eq!(true, Email::apply("user..name@domain.com"));
        assert_eq!(false, Email::apply("user@domain"));
    }

    #[test]
    fn validate() {
        assert_eq!(0, Email::validate("a@b.co", "email").len());

        let errors = Email::validate("user name@domain.com", "email");
        assert_eq!(1, errors.len());
        assert!(errors[0].contains("email"));

        assert_eq!(
            Email::validate("user@", "email"),
            Email::validate("user@", "email")
        );
    }
}
