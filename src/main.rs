use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use havenauth::actions::{login_user, signup_user, social_login};
use havenauth::config::{config_schema, load_config, DEFAULT_CONFIG_PATH};
use havenauth::models::FailurePayload;
use havenauth::reducers::{AuthState, SignupState};
use havenauth::routes::{self, View};
use havenauth::startup::build_context;
use havenauth::utils::logger::init_logging;
use havenauth::validation::{LoginForm, SignupForm, SocialForm, ValidationError};

/// Authors Haven account client
#[derive(Parser)]
#[command(name = "havenauth")]
#[command(about = "Sign up and log in to Authors Haven", long_about = None)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, short, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account; an activation link is emailed afterwards
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Log in with a token obtained from a social identity provider
    Social {
        /// e.g. google, facebook, twitter
        #[arg(long)]
        provider: String,
        #[arg(long)]
        access_token: String,
    },
    /// Show which view a location resolves to
    Route { location: String },
    /// Print the JSON schema of the configuration file
    Schema,
}

fn print_errors(failure: Option<&FailurePayload>) {
    match failure {
        Some(failure) if !failure.errors.is_empty() => {
            for (field, messages) in failure.errors.iter() {
                for message in messages {
                    eprintln!("  {}: {}", field, message);
                }
            }
        }
        _ => eprintln!("  request failed"),
    }
}

fn print_validation(err: &ValidationError) {
    eprintln!("Please fix the form ({}):", err);
    for (field, messages) in err.errors().iter() {
        for message in messages {
            eprintln!("  {}: {}", field, message);
        }
    }
}

fn print_next(location: &str) {
    let route = routes::resolve(location);
    println!("Next: {} ({:?})", location, route.view);
}

fn render_login(state: &AuthState) -> ExitCode {
    if state.is_authenticated {
        println!(
            "Logged in as {} <{}>",
            state.data.username.as_deref().unwrap_or("-"),
            state.data.email.as_deref().unwrap_or("-")
        );
        print_next("/");
        ExitCode::SUCCESS
    } else {
        eprintln!("Login failed:");
        print_errors(state.error.as_ref());
        ExitCode::FAILURE
    }
}

fn render_signup(state: &SignupState) -> ExitCode {
    if state.is_registered {
        println!(
            "{}",
            state
                .message
                .as_deref()
                .unwrap_or("Account created, check your email to activate it.")
        );
        print_next("/emailsent");
        ExitCode::SUCCESS
    } else {
        eprintln!("Signup failed:");
        print_errors(state.error.as_ref());
        ExitCode::FAILURE
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();

    // Commands that need neither config nor network.
    match &cli.command {
        Commands::Schema => {
            println!("{}", config_schema());
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Route { location } => {
            let route = routes::resolve(location);
            println!("{} -> {} ({:?})", location, route.id, route.view);
            if route.view == View::AccountActivated {
                if let Some(token) = routes::query_param(location, "token") {
                    println!("activation token: {}", token);
                }
            }
            return Ok(ExitCode::SUCCESS);
        }
        _ => {}
    }

    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };
    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Error initialising logging: {}", e);
        return Ok(ExitCode::FAILURE);
    }
    let context = build_context(&config)?;

    let code = match cli.command {
        Commands::Login { email, password } => {
            let form = LoginForm { email, password };
            match form.validate() {
                Ok(credentials) => {
                    context
                        .store
                        .dispatch(login_user(context.api.clone(), credentials))
                        .await;
                    render_login(&context.store.get_state().login)
                }
                Err(e) => {
                    print_validation(&e);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Signup {
            email,
            username,
            password,
            confirm_password,
        } => {
            let form = SignupForm {
                email,
                username,
                password,
                confirm_password,
            };
            match form.validate() {
                Ok(request) => {
                    context
                        .store
                        .dispatch(signup_user(context.api.clone(), request))
                        .await;
                    render_signup(&context.store.get_state().signup)
                }
                Err(e) => {
                    print_validation(&e);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Social {
            provider,
            access_token,
        } => {
            let form = SocialForm {
                provider,
                access_token,
            };
            match form.validate() {
                Ok(request) => {
                    context
                        .store
                        .dispatch(social_login(context.api.clone(), request))
                        .await;
                    render_login(&context.store.get_state().login)
                }
                Err(e) => {
                    print_validation(&e);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Route { .. } | Commands::Schema => ExitCode::SUCCESS,
    };

    Ok(code)
}
