use clap::{Parser, Subcommand};
use panel_client::{ApiResult, PanelClient};

#[derive(Parser)]
#[command(author, version, about = "List servers and users on a panel", long_about = None)]
struct Cli {
    #[arg(short = 'u', long, env = "PANEL_URL")]
    base_url: String,

    #[arg(short = 'k', long, env = "PANEL_API_KEY", hide_env_values = true)]
    api_key: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every server, following pagination.
    Servers,
    /// List every user, following pagination.
    Users,
    /// Show one server with its allocations.
    Server { id: u64 },
    All,
}

async fn list_servers(client: &PanelClient) -> ApiResult<()> {
    let mut page = 1;
    loop {
        let servers = client.servers().list().page(page).send().await?;
        for server in servers.attributes() {
            let state = if server.suspended { "suspended" } else { "active" };
            println!("{server} [{state}] node={} owner={}", server.node, server.user);
        }
        match servers.meta.next_page() {
            Some(next) => page = next,
            None => break,
        }
    }
    Ok(())
}

async fn list_users(client: &PanelClient) -> ApiResult<()> {
    let mut page = 1;
    loop {
        let users = client.users().list().page(page).send().await?;
        for user in users.attributes() {
            let role = if user.root_admin { "admin" } else { "user" };
            println!("#{} {user} ({role})", user.id);
        }
        match users.meta.next_page() {
            Some(next) => page = next,
            None => break,
        }
    }
    Ok(())
}

async fn show_server(client: &PanelClient, id: u64) -> ApiResult<()> {
    let server = client.servers().get(id).await?;
    println!("{}", server.attributes);
    println!("  image:   {}", server.attributes.container.image);
    println!("  startup: {}", server.attributes.container.startup_command);

    for allocation in client.servers().allocations(id).await? {
        let alias = allocation
            .alias
            .map(|a| format!(" ({a})"))
            .unwrap_or_default();
        println!("  {}:{}{alias}", allocation.ip, allocation.port);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ApiResult<()> {
    env_logger::init();
    let cli = Cli::parse();

    let client = PanelClient::builder()
        .base_url(&cli.base_url)
        .api_key(&cli.api_key)
        .build()?;

    match cli.command.unwrap_or(Commands::All) {
        Commands::Servers => list_servers(&client).await?,
        Commands::Users => list_users(&client).await?,
        Commands::Server { id } => show_server(&client, id).await?,
        Commands::All => {
            println!("Servers:");
            list_servers(&client).await?;
            println!("Users:");
            list_users(&client).await?;
        }
    }

    Ok(())
}
