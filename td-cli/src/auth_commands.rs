use clap::Subcommand;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Sign in and persist the session
    Login {
        /// Username
        username: String,

        /// Password
        #[arg(long)]
        password: String,
    },

    /// End the backend session and clear the persisted one
    Logout,

    /// Show the currently signed-in user
    Whoami,
}
