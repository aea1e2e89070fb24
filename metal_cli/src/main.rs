//! # Sofmetall CLI
//!
//! Terminal front end for the metal stock weight calculator, the catalog,
//! the cart and the chat assistant. Every result can be printed as JSON for
//! scripts and LLM tools.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use metal_chat::config::API_KEY_ENV;
use metal_chat::{greeting_now, quick_actions, ChatConfig, ChatService, ChatTurn, GeminiClient};
use metal_core::calculations::calculate;
use metal_core::cart::{format_som, Cart};
use metal_core::catalog::{filter_products, find_product, CategoryFilter};
use metal_core::i18n::tr;
use metal_core::{DimensionField, DimensionModel, Kilograms, Language, Shape};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "sofmetall")]
#[command(about = "Sofmetall metal stock calculator, catalog and assistant")]
#[command(version)]
struct Cli {
    /// Chat configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Weight of one piece of stock
    Weight(WeightArgs),
    /// Interactive calculator
    Calc(LangArgs),
    /// List and search products
    Catalog(CatalogArgs),
    /// Build a cart from product ids and show the total
    Cart(CartArgs),
    /// Ask the assistant (one message, or a session when none is given)
    Chat(ChatArgs),
    /// Show the effective chat configuration
    Config,
}

#[derive(Args)]
struct LangArgs {
    #[arg(long, default_value = "uz")]
    lang: Language,
}

#[derive(Args)]
struct WeightArgs {
    /// rebar, pipe, sheet, rect_tube, angle (or armatura, truba, list, profil, ugolnik)
    shape: Shape,
    /// Outside diameter (mm)
    #[arg(long, allow_negative_numbers = true)]
    diameter: Option<f64>,
    /// Stock length (m)
    #[arg(long, allow_negative_numbers = true)]
    length: Option<f64>,
    /// Width or flange (mm)
    #[arg(long, allow_negative_numbers = true)]
    width: Option<f64>,
    /// Sheet or flange thickness (mm)
    #[arg(long, allow_negative_numbers = true)]
    thickness: Option<f64>,
    /// Tube height (mm)
    #[arg(long, allow_negative_numbers = true)]
    height: Option<f64>,
    /// Wall thickness (mm)
    #[arg(long, allow_negative_numbers = true)]
    wall: Option<f64>,
    #[arg(long)]
    json: bool,
    #[arg(long, default_value = "uz")]
    lang: Language,
}

#[derive(Args)]
struct CatalogArgs {
    /// Category id or `all`
    #[arg(long, default_value = "all")]
    category: CategoryFilter,
    /// Case-insensitive name search
    #[arg(long)]
    search: Option<String>,
    #[arg(long)]
    json: bool,
    #[arg(long, default_value = "uz")]
    lang: Language,
}

#[derive(Args)]
struct CartArgs {
    /// Product id; repeat to add more units
    #[arg(long = "add", required = true, num_args = 1..)]
    add: Vec<String>,
    #[arg(long)]
    json: bool,
    #[arg(long, default_value = "uz")]
    lang: Language,
}

#[derive(Args)]
struct ChatArgs {
    #[arg(long, default_value = "uz")]
    lang: Language,
    /// Override the model name
    #[arg(long)]
    model: Option<String>,
    /// Message to send; omit for an interactive session
    #[arg(trailing_var_arg = true)]
    message: Vec<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Weight(args) => weight(args),
        Command::Calc(args) => calc(args.lang),
        Command::Catalog(args) => catalog(args),
        Command::Cart(args) => cart(args),
        Command::Chat(args) => chat(load_chat_config(cli.config.as_deref())?, args),
        Command::Config => {
            print!("{}", load_chat_config(cli.config.as_deref())?);
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_chat_config(path: Option<&Path>) -> Result<ChatConfig> {
    let base = match path {
        Some(path) => ChatConfig::load(path).context("failed to load chat config")?,
        None => ChatConfig::default(),
    };
    Ok(base.with_env(|key| std::env::var(key).ok()))
}

/// Print a prompt and read one line; `None` on end of input
fn prompt(text: &str) -> Option<String> {
    print!("{}", text);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn weight(args: WeightArgs) -> Result<()> {
    let mut model = DimensionModel::new(args.shape);
    let overrides = [
        (DimensionField::Diameter, args.diameter),
        (DimensionField::Length, args.length),
        (DimensionField::Width, args.width),
        (DimensionField::Thickness, args.thickness),
        (DimensionField::Height, args.height),
        (DimensionField::Wall, args.wall),
    ];
    for (field, value) in overrides {
        if let Some(value) = value {
            model.set(field, value);
        }
    }

    if args.json {
        let result = calculate(&model.profile());
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    print_weight(&model, args.lang)
}

fn print_weight(model: &DimensionModel, lang: Language) -> Result<()> {
    let result = calculate(&model.profile());

    println!("═══════════════════════════════════════");
    println!("  {} ({})", model.shape.label(lang), model.shape.display_name());
    println!("═══════════════════════════════════════");
    for field in model.visible_fields() {
        println!("  {:<12} {} {}", field.label(lang), model.get(*field), field.unit());
    }
    println!();
    println!("  {}", result.formula);
    println!("  {}: {}", tr("weight")?.get(lang), Kilograms(result.weight_kg));
    if let Some(per_meter) = result.kg_per_meter() {
        println!("  {:.2} kg/m", per_meter);
    }
    println!("═══════════════════════════════════════");
    Ok(())
}

fn calc(lang: Language) -> Result<()> {
    println!("{}", tr("calcTitle")?.get(lang));
    println!("{}", tr("calcDesc")?.get(lang));
    println!();

    let mut model = DimensionModel::default();
    loop {
        let Some(text) = prompt(&format!("Shape [{}] (q to quit): ", model.shape.id())) else {
            return Ok(());
        };
        match text.as_str() {
            "q" | "quit" => return Ok(()),
            "" => {}
            name => match Shape::from_str_flexible(name) {
                Ok(shape) => model.switch_shape(shape),
                Err(e) => {
                    eprintln!("{}", e);
                    continue;
                }
            },
        }

        for field in model.visible_fields() {
            let current = model.get(*field);
            let Some(text) = prompt(&format!(
                "{} ({}) [{}]: ",
                field.label(lang),
                field.unit(),
                current
            )) else {
                return Ok(());
            };
            if text.is_empty() {
                continue;
            }
            if let Err(e) = model.set_str(*field, &text) {
                eprintln!("{}", e);
            }
        }

        println!();
        print_weight(&model, lang)?;
        println!();
    }
}

fn catalog(args: CatalogArgs) -> Result<()> {
    let found = filter_products(args.category, args.search.as_deref().unwrap_or(""));
    if args.json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    let som = tr("som")?.get(args.lang);
    for product in &found {
        let weight = product
            .unit_weight()
            .map(|kg| format!("{}/{}", kg, product.unit.symbol()))
            .unwrap_or_default();
        println!(
            "{:>3}  {:<36} {:>9} {}/{:<4} {}",
            product.id,
            product.name(args.lang),
            format_som(product.price),
            som,
            product.unit.symbol(),
            weight
        );
    }
    info!(count = found.len(), "catalog listed");
    Ok(())
}

fn cart(args: CartArgs) -> Result<()> {
    let mut cart = Cart::new();
    for id in &args.add {
        cart.add_product(find_product(id)?);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&cart)?);
        return Ok(());
    }

    let som = tr("som")?.get(args.lang);
    println!("{} ({})", tr("cart")?.get(args.lang), cart.item_count());
    for line in cart.lines() {
        println!(
            "  {:<36} {:>3} x {:>9} = {:>11} {}",
            line.product.name(args.lang),
            line.quantity,
            format_som(line.product.price),
            format_som(line.line_total()),
            som
        );
    }
    println!("{}: {} {}", tr("total")?.get(args.lang), format_som(cart.total_price()), som);
    Ok(())
}

fn chat(config: ChatConfig, args: ChatArgs) -> Result<()> {
    let config = match args.model {
        Some(model) => config.with_model(model),
        None => config,
    };
    if !config.has_api_key() {
        warn!("{} is not set; the assistant will only answer with fallback text", API_KEY_ENV);
    }

    let service = ChatService::new(GeminiClient::new(config)?);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    if !args.message.is_empty() {
        let text = args.message.join(" ");
        let reply = runtime.block_on(service.send_chat_message(&text, args.lang, &[]));
        println!("{}", reply);
        return Ok(());
    }

    println!("{}", greeting_now(args.lang));
    let actions = quick_actions(args.lang);
    for (i, action) in actions.iter().enumerate() {
        println!("  [{}] {}", i + 1, action.label);
    }
    let mut history = Vec::new();
    while let Some(line) = prompt("> ") {
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }
        let picked = line
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| actions.get(i));
        let line = match picked {
            Some(action) => {
                println!("> {}", action.query);
                action.query.to_string()
            }
            None => line,
        };
        let reply = runtime.block_on(service.send_chat_message(&line, args.lang, &history));
        println!("{}", reply);
        println!();
        history.push(ChatTurn::user(line));
        history.push(ChatTurn::model(reply));
    }
    Ok(())
}
