use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tokcount",
    version,
    about = "Print the token count of the chat messages in a JSON file"
)]
pub struct Cli {
    /// JSON file holding one message object or an array of messages
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}
