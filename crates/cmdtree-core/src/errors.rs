use thiserror::Error;

/// Result type alias using ConfigError
pub type Result<T> = std::result::Result<T, ConfigError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Subcommand shape
    SubcommandNamed,
    SubcommandAliased,
    SubcommandNamespaced,
    SubcommandWithoutHandler,

    // Root shape
    RootUnnamed,
    RootWithoutHandler,

    // Children
    EmptyAliasSet,

    // Host registry
    Registration,

    // Settings
    InvalidSettings,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::SubcommandNamed => "ERR_SUBCOMMAND_NAMED",
            ErrorKind::SubcommandAliased => "ERR_SUBCOMMAND_ALIASED",
            ErrorKind::SubcommandNamespaced => "ERR_SUBCOMMAND_NAMESPACED",
            ErrorKind::SubcommandWithoutHandler => "ERR_SUBCOMMAND_WITHOUT_HANDLER",
            ErrorKind::RootUnnamed => "ERR_ROOT_UNNAMED",
            ErrorKind::RootWithoutHandler => "ERR_ROOT_WITHOUT_HANDLER",
            ErrorKind::EmptyAliasSet => "ERR_EMPTY_ALIAS_SET",
            ErrorKind::Registration => "ERR_REGISTRATION",
            ErrorKind::InvalidSettings => "ERR_INVALID_SETTINGS",
        }
    }
}

// ========== End Error Facility ==========

/// Failure reported by a host registry when it refuses a registration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The host already holds a command under this qualified name
    #[error("command '{qualified_name}' is already registered")]
    Duplicate { qualified_name: String },

    /// Host-specific refusal
    #[error("host rejected command: {reason}")]
    Rejected { reason: String },
}

/// Construction-time configuration errors
///
/// These are programmer errors raised by `CommandBuilder`. They are never
/// recovered inside this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("subcommand may not declare a name")]
    SubcommandNamed,

    #[error("subcommand may not declare aliases")]
    SubcommandAliased,

    #[error("subcommand may not declare a namespace")]
    SubcommandNamespaced,

    #[error("subcommand requires a handler")]
    SubcommandWithoutHandler,

    #[error("root command requires a name")]
    RootUnnamed,

    #[error("root command requires a handler")]
    RootWithoutHandler,

    #[error("alias set must be non-empty")]
    EmptyAliasSet,

    /// The host registry refused the finished root command
    #[error("failed to register command '{label}': {source}")]
    Registration {
        label: String,
        #[source]
        source: RegistryError,
    },
}

impl ConfigError {
    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::SubcommandNamed => ErrorKind::SubcommandNamed,
            ConfigError::SubcommandAliased => ErrorKind::SubcommandAliased,
            ConfigError::SubcommandNamespaced => ErrorKind::SubcommandNamespaced,
            ConfigError::SubcommandWithoutHandler => ErrorKind::SubcommandWithoutHandler,
            ConfigError::RootUnnamed => ErrorKind::RootUnnamed,
            ConfigError::RootWithoutHandler => ErrorKind::RootWithoutHandler,
            ConfigError::EmptyAliasSet => ErrorKind::EmptyAliasSet,
            ConfigError::Registration { .. } => ErrorKind::Registration,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

/// Errors raised while loading `Settings`
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}

impl SettingsError {
    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidSettings
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}
