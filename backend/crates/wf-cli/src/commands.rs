use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the resolved schema description as JSON
    Describe {
        /// Only describe this entity (e.g. User)
        #[arg(long)]
        entity: Option<String>,
    },

    /// Print CREATE TABLE / CREATE INDEX statements for the backend
    Ddl,

    /// Create the SQLite database file and install the schema into it
    Install,
}
