//! Navigation types.

/// Specifying the different views.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Login,
    Board,
    CandidateDetail,
    Apply,
}

/// Specifying the login form fields.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

impl LoginField {
    pub fn toggled(self) -> LoginField {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_field_toggle() {
        assert_eq!(LoginField::Email.toggled(), LoginField::Password);
        assert_eq!(LoginField::Password.toggled(), LoginField::Email);
    }
}
