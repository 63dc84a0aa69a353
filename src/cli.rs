//! Command-Line Interface
//!
//! Argument surface and dispatch for kommit. The command table is built by
//! clap at startup and handed to `run`; dynamic completion is served by the
//! hidden `suggest` subcommand that the emitted completion scripts call back
//! into.

use std::io;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};

use crate::{
    commit::Commit,
    errors::{KommitError, Result},
    git::{GitBackend, SystemGit, ensure_repository},
    suggest::{suggest_messages, suggest_scopes, suggest_types},
    utils::print_success,
};

/// The shells kommit can emit a completion script for.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl From<CompletionShell> for Shell {
    fn from(shell: CompletionShell) -> Self {
        match shell {
            CompletionShell::Bash => Shell::Bash,
            CompletionShell::Zsh => Shell::Zsh,
            CompletionShell::Fish => Shell::Fish,
            CompletionShell::Powershell => Shell::PowerShell,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a completion script for the given shell
    Completion {
        /// The shell to generate the script for
        #[arg(value_name = "SHELL", value_enum)]
        shell: CompletionShell,
    },

    /// List completion candidates for the positional arguments
    /// (invoked by the generated completion scripts, not by users)
    #[command(hide = true)]
    Suggest {
        /// The positional arguments already typed on the command line
        #[arg(value_name = "TYPED", num_args = 0.., allow_hyphen_values = true)]
        typed: Vec<String>,
    },
}

#[derive(Parser)]
#[command(about = "A conventional commit message generator.\n\
Builds `type(scope): message` commits and offers tab-completion over the\n\
types and scopes found in your git history.\n\n\
Example: kommit feat auth add login support")]
#[command(name = "kommit")]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// Commit type (e.g. feat, fix, chore)
    #[arg(value_name = "TYPE", required = true)]
    commit_type: Option<String>,

    /// Commit scope; `-` or an empty string means "no scope"
    #[arg(value_name = "SCOPE", required = true, allow_hyphen_values = true)]
    scope: Option<String>,

    /// Commit message; multiple words are joined with single spaces
    #[arg(value_name = "MESSAGE", required = true, num_args = 1..)]
    message: Vec<String>,

    /// Commands
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print more information about the operation
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

/// Parses the command line and runs the selected operation.
///
/// # Errors
/// Returns an error if the commit cannot be created; completion queries
/// never fail.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let git = SystemGit;

    match cli.command {
        Some(Commands::Completion { shell }) => {
            print_completion_script(shell);

            Ok(())
        }
        Some(Commands::Suggest { typed }) => {
            // One candidate per line for the shell to pick up.
            for candidate in suggestions_for(&git, &typed) {
                println!("{candidate}");
            }

            Ok(())
        }
        None => {
            let commit_type = cli
                .commit_type
                .ok_or_else(|| KommitError::InvalidInput("missing commit type".to_string()))?;
            let scope = cli.scope.unwrap_or_default();

            ensure_repository()?;

            let commit = Commit::new(commit_type, scope, cli.message.join(" "));

            if cli.verbose {
                println!("Committing `{commit}`...");
            }

            git.create_commit(&commit.to_string())?;

            if cli.verbose {
                print_success("Commit created", &commit.to_string());
            }

            Ok(())
        }
    }
}

/// Maps the already-typed positional arguments to the matching suggestion
/// list: types first, then scopes, then recent messages, then nothing.
fn suggestions_for(git: &dyn GitBackend, typed: &[String]) -> Vec<String> {
    match typed.len() {
        0 => suggest_types(),
        1 => suggest_scopes(git),
        2 => suggest_messages(git),
        _ => Vec::new(),
    }
}

/// Writes the clap completion script for `shell` to stdout, followed by a
/// hook that routes positional-argument completion through `kommit suggest`.
fn print_completion_script(shell: CompletionShell) {
    let mut command = Cli::command();

    generate(Shell::from(shell), &mut command, "kommit", &mut io::stdout());

    if let Some(hook) = suggestion_hook(shell) {
        println!("\n{hook}");
    }
}

/// Shell-specific glue wiring tab-completion of the positional arguments to
/// the hidden `suggest` subcommand. The hooks deliberately register without
/// a file-path fallback.
fn suggestion_hook(shell: CompletionShell) -> Option<&'static str> {
    const BASH_HOOK: &str = r#"# Dynamic suggestions for the kommit positional arguments.
_kommit_suggest() {
    local -a typed
    typed=("${COMP_WORDS[@]:1:COMP_CWORD-1}")
    local IFS=$'\n'
    COMPREPLY=($(compgen -W "$(kommit suggest -- "${typed[@]}" 2>/dev/null)" -- "${COMP_WORDS[COMP_CWORD]}"))
}
complete -F _kommit_suggest kommit"#;

    const ZSH_HOOK: &str = r#"# Dynamic suggestions for the kommit positional arguments.
_kommit_suggest() {
    local -a suggestions
    suggestions=("${(@f)$(kommit suggest -- "${(@)words[2,CURRENT-1]}" 2>/dev/null)}")
    compadd -- "${suggestions[@]}"
}
compdef _kommit_suggest kommit"#;

    const FISH_HOOK: &str = r#"# Dynamic suggestions for the kommit positional arguments.
complete -c kommit -f
complete -c kommit -n "not __fish_seen_subcommand_from completion" \
    -a "(kommit suggest -- (commandline -opc)[2..] 2>/dev/null)""#;

    match shell {
        CompletionShell::Bash => Some(BASH_HOOK),
        CompletionShell::Zsh => Some(ZSH_HOOK),
        CompletionShell::Fish => Some(FISH_HOOK),
        CompletionShell::Powershell => None,
    }
}
