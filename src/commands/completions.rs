//! Shell completions command

use clap::CommandFactory;

use crate::cli::CompletionsArgs;
use crate::error::Result;

/// Write completions for the requested shell to stdout
pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(
        args.shell,
        &mut cmd,
        "shimpack",
        &mut std::io::stdout().lock(),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap_complete::Shell;

    #[test]
    fn test_completions_bash() {
        let args = CompletionsArgs { shell: Shell::Bash };
        assert!(run(args).is_ok());
    }

    #[test]
    fn test_completions_zsh() {
        let args = CompletionsArgs { shell: Shell::Zsh };
        assert!(run(args).is_ok());
    }

    #[test]
    fn test_completions_powershell() {
        let args = CompletionsArgs {
            shell: Shell::PowerShell,
        };
        assert!(run(args).is_ok());
    }
}
