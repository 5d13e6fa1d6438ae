//! Command line options for configuring otterprobe.
//!
//! The configuration options take precedence in this order: command line, config file, defaults.
//! If a config file is present, but command line options are also present, the command line
//! options will override the config file options. If no config file is present, the default
//! configuration will be used. Following this pattern, command line options should not require
//! one another to be passed, since some options may be configured via `config.toml` or defaults.

use clap::builder::styling;

/// The terminal output style configuration.
pub const TERM_STYLE: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Cyan.on_default())
    .placeholder(styling::AnsiColor::Cyan.on_default())
    .valid(styling::AnsiColor::Cyan.on_default());

// Help Headers
const CORE_OPTS: &str = "Core Configuration Options";
const RPC_OPTS: &str = "RPC Endpoint Options";
const FOLLOW_OPTS: &str = "Chain Head Options";

#[derive(Debug, Default, clap::Parser)]
#[command(
    name = "otterprobe",
    version = crate::config::system::VERSION_STR,
    author,
    styles = TERM_STYLE,
    about = "Checks that an endpoint is an Otterscan-patched Erigon node and reads its block headers.",
)]
pub struct Otterprobe {
    // -- Core Configuration Options
    //
    /// Path to a TOML config file for otterprobe.
    #[arg(long, short = 'c', help_heading = CORE_OPTS)]
    pub config: Option<std::path::PathBuf>,

    /// Print the normalized genesis header after a successful probe.
    #[arg(long, help_heading = CORE_OPTS)]
    pub genesis: bool,
    #[arg(long, hide = true, conflicts_with = "genesis")]
    pub no_genesis: bool,

    // -- RPC Endpoint Options
    //
    /// Erigon JSON-RPC endpoint [http(s)://]. Pass an empty string to use the default endpoint.
    #[arg(long, short = 'u', help_heading = RPC_OPTS)]
    pub url: Option<String>,

    /// Endpoint used when `--url` is empty.
    #[arg(long, help_heading = RPC_OPTS)]
    pub default_url: Option<String>,

    /// Time in ms for the node to answer a request.
    #[arg(long, help_heading = RPC_OPTS)]
    pub ttl: Option<u64>,

    // -- Chain Head Options
    //
    /// Keep following the chain head after probing.
    #[arg(long, short = 'f', help_heading = FOLLOW_OPTS)]
    pub follow: Option<Follow>,

    /// How often to poll for a new block, in ms.
    #[arg(long, help_heading = FOLLOW_OPTS)]
    pub poll_interval: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Follow {
    #[default]
    Off,

    /// Print every new block number.
    Number,

    /// Print a summary of every new normalized block header.
    Header,
}
