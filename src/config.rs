//! Configuration for memofile
//!
//! Centralized configuration with sensible defaults.

/// Default scratch chunk size for reads (4 KiB)
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Default cap on buffered input (256 MiB)
pub const DEFAULT_MAX_INPUT_SIZE: usize = 256 * 1024 * 1024;

/// Default filename bound, matching Linux `PATH_MAX`
pub const DEFAULT_MAX_PATH_LEN: usize = 4096;

/// Default permission bits for files created by `set`
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Main configuration for a memofile engine
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Input Configuration
    // -------------------------------------------------------------------------
    /// Size of the scratch chunk used for every read (stdin and files)
    pub chunk_size: usize,

    /// Maximum number of bytes accepted on the input stream
    pub max_input_size: usize,

    // -------------------------------------------------------------------------
    // Protocol Configuration
    // -------------------------------------------------------------------------
    /// Filenames with this many bytes or more are rejected
    pub max_path_len: usize,

    /// How the `set` length header is parsed
    pub length_parsing: LengthParsing,

    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Permission bits for files created by `set` (Unix only)
    pub file_mode: u32,
}

/// Parsing mode for the `set` length header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthParsing {
    /// ASCII digits only, nothing else
    #[default]
    Strict,

    /// C `atoi` semantics: leading whitespace, optional sign, digit prefix.
    /// A token without digits reads as zero.
    Lenient,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
            max_path_len: DEFAULT_MAX_PATH_LEN,
            length_parsing: LengthParsing::Strict,
            file_mode: DEFAULT_FILE_MODE,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the read chunk size (in bytes, clamped to at least 1)
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.config.chunk_size = size.max(1);
        self
    }

    /// Set the maximum accepted input size (in bytes)
    pub fn max_input_size(mut self, size: usize) -> Self {
        self.config.max_input_size = size;
        self
    }

    /// Set the filename length bound (in bytes)
    pub fn max_path_len(mut self, len: usize) -> Self {
        self.config.max_path_len = len;
        self
    }

    /// Set the length header parsing mode
    pub fn length_parsing(mut self, mode: LengthParsing) -> Self {
        self.config.length_parsing = mode;
        self
    }

    /// Set the permission bits for created files
    pub fn file_mode(mut self, mode: u32) -> Self {
        self.config.file_mode = mode;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
