//! Command line configuration.

use crate::error::{Error, Result};

use getopts::Options;

//-----------------------------------------------------------------------------

/// Generator configuration.
///
/// # Examples
///
/// ```
/// use pextgen::config::Config;
///
/// let args: Vec<String> = vec!["pextgen".into(), "--module".into(), "bits".into()];
/// let config = Config::from_args(&args).unwrap().unwrap();
/// assert_eq!(config.module(), "bits");
///
/// assert!(Config::new("").is_err());
/// assert!(Config::new("2bits").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    module: String,
}

// Strict and reserved keywords of the 2018 edition and later.
const KEYWORDS: [&str; 52] = [
    "as", "async", "await", "break", "const", "continue", "crate", "dyn",
    "else", "enum", "extern", "false", "fn", "for", "if", "impl",
    "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait",
    "true", "type", "unsafe", "use", "where", "while", "abstract", "become",
    "box", "do", "final", "macro", "override", "priv", "typeof", "unsized",
    "virtual", "yield", "try", "gen",
];

impl Config {
    /// Creates a configuration that places the tables in module `module`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingModule`] if the name is empty and [`Error::InvalidModule`] if it is not a Rust identifier.
    pub fn new(module: &str) -> Result<Config> {
        if module.is_empty() {
            return Err(Error::MissingModule);
        }
        if !Self::is_identifier(module) {
            return Err(Error::InvalidModule(module.to_string()));
        }
        Ok(Config { module: module.to_string(), })
    }

    /// Parses the configuration from command line arguments.
    ///
    /// The first argument is the program name.
    /// Returns `Ok(None)` if help was requested.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Options`] if the arguments cannot be parsed or there are positional arguments.
    /// Otherwise the errors from [`Config::new`] are passed through.
    pub fn from_args(args: &[String]) -> Result<Option<Config>> {
        let opts = Self::options();
        let matches = opts.parse(args.iter().skip(1))?;
        if matches.opt_present("h") {
            return Ok(None);
        }
        if let Some(arg) = matches.free.first() {
            return Err(Error::Options(getopts::Fail::UnexpectedArgument(arg.clone())));
        }

        let module = matches.opt_str("m").unwrap_or_default();
        Self::new(&module).map(Some)
    }

    /// Returns the usage message for the program.
    pub fn usage(program: &str) -> String {
        let header = format!("Usage: {} --module NAME", program);
        Self::options().usage(&header)
    }

    /// Returns the name of the generated module.
    #[inline]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Returns `true` if `name` can be used as a module name.
    ///
    /// Raw identifiers and non-ASCII identifiers are not accepted.
    pub fn is_identifier(name: &str) -> bool {
        let mut chars = name.chars();
        let valid_start = match chars.next() {
            Some(c) => c.is_ascii_alphabetic() || c == '_',
            None => false,
        };
        valid_start
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            && name != "_"
            && !KEYWORDS.contains(&name)
    }

    fn options() -> Options {
        let mut opts = Options::new();
        opts.optopt("m", "module", "name of the generated module (required)", "NAME");
        opts.optflag("h", "help", "print this help");
        opts
    }
}

//-----------------------------------------------------------------------------


//-----------------------------------------------------------------------------
