//! Button Kit CLI - render button controls and simulate mouse-down dispatch.
//!
//! Logs go to stderr; stdout carries markup or JSON only.

use anyhow::{Context, Result};
use button_kit::{
    button::Button, ApiResponse, Attributes, ButtonConfiguration, Dispatch, DomEvent,
    MouseDownEvent, OutputFormat, RenderedControl, Settings,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "button-kit")]
#[command(about = "Render button controls and simulate mouse-down dispatch")]
#[command(version)]
struct Cli {
    /// Settings file (overrides BUTTON_KIT_CONFIG and the platform default)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a button and print it
    Render {
        #[command(flatten)]
        button: ButtonArgs,
        /// Output format (defaults to the settings file value)
        #[arg(short, long)]
        format: Option<Format>,
    },
    /// Render a button and dispatch one mouse-down at it
    Press {
        #[command(flatten)]
        button: ButtonArgs,
    },
    /// Print the resolved settings
    Settings,
}

#[derive(Args)]
struct ButtonArgs {
    /// Button label
    label: String,
    /// Extra class merged with the root class
    #[arg(short, long)]
    class_name: Option<String>,
    /// Render the control disabled
    #[arg(short, long)]
    disabled: bool,
    /// Render a form submit control
    #[arg(short, long)]
    submit: bool,
    /// Prevent focus on mouse-down
    #[arg(long)]
    no_focus_on_click: bool,
    /// Pass-through attribute as NAME=VALUE (repeatable)
    #[arg(short, long = "attr", value_name = "NAME=VALUE")]
    attrs: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Html => OutputFormat::Html,
            Format::Json => OutputFormat::Json,
        }
    }
}

impl ButtonArgs {
    fn into_configuration(self) -> Result<ButtonConfiguration> {
        let mut attributes = Vec::with_capacity(self.attrs.len());
        for pair in &self.attrs {
            attributes.push(Attributes::parse_pair(pair)?);
        }

        let mut config = ButtonConfiguration::new(self.label)
            .disabled(self.disabled)
            .form_submit(self.submit)
            .focus_on_click(!self.no_focus_on_click)
            .attrs(attributes);
        if let Some(class_name) = self.class_name {
            config = config.class_name(class_name);
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let (settings, path) =
        Settings::load(cli.config.as_deref()).context("failed to load settings")?;
    tracing::debug!(path = ?path, "settings resolved");

    let output = match cli.command {
        Commands::Render { button, format } => {
            let format = format.map(OutputFormat::from).unwrap_or(settings.output.format);
            handle_render(&settings, button, format)?
        }
        Commands::Press { button } => handle_press(&settings, button)?,
        Commands::Settings => to_json(
            &settings,
            &ApiResponse::ok(json!({
                "path": path,
                "settings": settings,
            })),
        )?,
    };

    println!("{}", output);
    Ok(())
}

fn to_json<T: serde::Serialize>(settings: &Settings, value: &T) -> Result<String> {
    let text = if settings.output.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

fn render(settings: &Settings, config: ButtonConfiguration) -> RenderedControl {
    Button::with_styles(settings.styles.clone()).render(config)
}

fn handle_render(settings: &Settings, args: ButtonArgs, format: OutputFormat) -> Result<String> {
    let control = render(settings, args.into_configuration()?);
    match format {
        OutputFormat::Html => Ok(control.to_html()),
        OutputFormat::Json => to_json(settings, &ApiResponse::ok(control.to_element())),
    }
}

fn handle_press(settings: &Settings, args: ButtonArgs) -> Result<String> {
    // Stand-in caller handler so the report can tell whether it ran.
    let invoked = Rc::new(Cell::new(false));
    let flag = invoked.clone();
    let config = args
        .into_configuration()?
        .on_mouse_down(move |_event: &mut dyn DomEvent| flag.set(true));

    let control = render(settings, config);
    let mut event = MouseDownEvent::at(0.0, 0.0);
    let dispatch = control.dispatch_mouse_down(&mut event);

    tracing::info!(?dispatch, prevented = event.default_prevented(), "mouse-down dispatched");

    to_json(
        settings,
        &ApiResponse::ok(json!({
            "dispatch": dispatch,
            "handler_invoked": invoked.get(),
            "default_prevented": event.default_prevented(),
            "focuses": dispatch != Dispatch::Withheld && !event.default_prevented(),
            "control": control.to_element(),
        })),
    )
}
