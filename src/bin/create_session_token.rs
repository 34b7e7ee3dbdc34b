use chrono::Duration;
use clap::Parser;
use shortly::auth::session::create_session_token;
use shortly::config;

/// Mint a development session token signed with SESSION_SECRET
#[derive(Debug, Parser)]
#[command(name = "create_session_token")]
struct Args {
    /// User ID to put in the `sub` claim
    user_id: String,

    /// Session ID to put in the `sid` claim
    #[arg(long)]
    session_id: Option<String>,

    /// Lifetime in minutes
    #[arg(long, default_value_t = 60)]
    ttl_minutes: i64,
}

fn main() {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let settings = config::get_settings();

    if settings.session_public_key.is_some() {
        eprintln!("Warning: SESSION_PUBLIC_KEY is set, the server will not accept HS256 tokens");
    }

    let token = create_session_token(
        &settings.session_secret,
        &args.user_id,
        args.session_id.as_deref(),
        Duration::minutes(args.ttl_minutes),
    )
    .unwrap_or_else(|e| {
        eprintln!("Error: failed to sign session token: {}", e);
        std::process::exit(1);
    });

    println!("\n=== Session Token Generated ===\n");
    println!("User ID: {}", args.user_id);
    println!("Expires in: {} minutes", args.ttl_minutes);
    println!("\nToken:");
    println!("{}\n", token);
    println!("=== Usage ===");
    println!(
        "curl -i --cookie \"{}={}\" http://{}/dashboard",
        settings.session_cookie,
        token,
        settings.address()
    );
    println!();
}
