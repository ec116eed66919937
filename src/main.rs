//! CLI entry point for nereo-blog

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "nereo-blog")]
#[command(version)]
#[command(about = "Blog content pipeline for a static portfolio site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new blog
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post dated today
    New {
        /// Title of the new post
        title: String,
    },

    /// List posts, newest first
    List,

    /// Print the rendered HTML of one post
    Show {
        /// Post slug (lowercased filename without extension)
        slug: String,
    },

    /// Generate the static blog pages
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Serve the blog
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Remove the generated pages
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "nereo_blog=debug,info"
    } else {
        "nereo_blog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing blog in {:?}", target_dir);
            nereo_blog::commands::init::init_site(&target_dir)?;
            println!("Initialized blog in {:?}", target_dir);
        }

        Commands::New { title } => {
            let blog = nereo_blog::Blog::new(&base_dir)?;
            let path = blog.new_post(&title)?;
            println!("Created: {:?}", path);
        }

        Commands::List => {
            let blog = nereo_blog::Blog::new(&base_dir)?;
            nereo_blog::commands::list::run(&blog).await?;
        }

        Commands::Show { slug } => {
            let blog = nereo_blog::Blog::new(&base_dir)?;
            nereo_blog::commands::show::run(&blog, &slug).await?;
        }

        Commands::Generate { watch } => {
            let blog = nereo_blog::Blog::new(&base_dir)?;
            tracing::info!("Generating blog pages...");
            blog.generate().await?;
            println!("Generated successfully!");

            if watch {
                nereo_blog::commands::generate::watch(&blog).await?;
            }
        }

        Commands::Server { port, ip } => {
            let blog = nereo_blog::Blog::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            nereo_blog::server::start(&blog, &ip, port).await?;
        }

        Commands::Clean => {
            let blog = nereo_blog::Blog::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            blog.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("nereo-blog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
