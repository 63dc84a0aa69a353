use kommit::{
    cli::run,
    errors::{GitError, KommitError},
    utils::print_error,
};

fn main() {
    if let Err(error) = run() {
        match &error {
            KommitError::Git(GitError::RepositoryNotFound) => print_error(
                "Git repository not found",
                "Could not find a git repository in this directory or any parent directories.",
                "Please ensure you're in a Git repository.",
            ),
            // git already forwarded its own stderr for a failed commit; this
            // line only adds the exit status.
            _ => print_error("Command failed", &error.to_string(), ""),
        }

        std::process::exit(1);
    }
}
