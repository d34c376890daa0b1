use secrecy::SecretString;

/// Runtime environment the server believes it is in. The gate is only
/// enforced by default in production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub password: Option<SecretString>,
    pub environment: Environment,
    pub force_auth: bool,
}

impl GlobalArgs {
    #[must_use]
    pub const fn new(environment: Environment) -> Self {
        Self {
            password: None,
            environment,
            force_auth: false,
        }
    }

    pub fn set_password(&mut self, password: SecretString) {
        self.password = Some(password);
    }
}
