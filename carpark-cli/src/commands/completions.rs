//! Shell completion generation command.
//!
//! Generates completion scripts for bash, zsh, fish and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "carpark";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            eprintln!("# Generating {} completion script", self.shell);
            match self.shell {
                Shell::Bash => {
                    eprintln!("#   carpark completions bash > ~/.local/share/bash-completion/completions/carpark");
                }
                Shell::Zsh => {
                    eprintln!("#   carpark completions zsh > ~/.zsh/completions/_carpark");
                }
                Shell::Fish => {
                    eprintln!("#   carpark completions fish > ~/.config/fish/completions/carpark.fish");
                }
                Shell::PowerShell => {
                    eprintln!("#   carpark completions powershell | Out-String | Invoke-Expression");
                }
                _ => {}
            }
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
