use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
///
/// The shell is a value enum, so an unsupported name is rejected at parse
/// time with the list of valid choices.
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    shimpack completions bash > ~/.bash_completion.d/shimpack\n\n\
                  Generate zsh completions:\n    shimpack completions zsh > ~/.zfunc/_shimpack\n\n\
                  Generate fish completions:\n    shimpack completions fish > ~/.config/fish/completions/shimpack.fish")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
