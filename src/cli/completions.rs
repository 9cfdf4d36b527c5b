use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    mvnfetch completions --shell bash > ~/.bash_completion.d/mvnfetch\n\n\
                  Generate zsh completions:\n    mvnfetch completions --shell zsh > ~/.zfunc/_mvnfetch\n\n\
                  Generate fish completions:\n    mvnfetch completions --shell fish > ~/.config/fish/completions/mvnfetch.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long, short = 's')]
    pub shell: String,
}
