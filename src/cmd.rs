use clap::Parser;
use futures::future::join_all;

use playerfeed::resolver::PlayerResolver;
use playerfeed::settings::Settings;
use playerfeed::types::{PlayerList, PlayerQuery};

#[derive(Parser, Debug)]
pub enum Cmd {
    /// Look up active players by name or id.
    Lookup {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        id: Option<u64>,
        /// Number of identical lookups issued at once. They share one fetch.
        #[arg(long, default_value_t = 1)]
        concurrent: usize,
    },
}

async fn lookup(
    resolver: &PlayerResolver,
    query: PlayerQuery,
    concurrent: usize,
) -> anyhow::Result<PlayerList> {
    let first = resolver.resolve_query(&query);
    let rest = join_all((1..concurrent).map(|_| resolver.resolve_query(&query)));

    // overlapping lookups settle with the same outcome
    let (players, _) = tokio::join!(first, rest);
    Ok(players?)
}

impl Cmd {
    pub async fn run(self) -> anyhow::Result<()> {
        let settings = Settings::from_env()?;
        let resolver = PlayerResolver::from_settings(&settings)?;

        match self {
            Cmd::Lookup {
                name,
                id,
                concurrent,
            } => {
                let players = lookup(&resolver, PlayerQuery { name, id }, concurrent).await?;
                println!("{}", serde_json::to_string_pretty(&*players)?);
            }
        }

        Ok(())
    }
}
