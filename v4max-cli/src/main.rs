use std::process;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::debug;
use v4max::config::ProfileKind;
use v4max::event::KeyEvent;
use v4max::hooks::{ProcessResult, UserHooks};
use v4max::host::Host;
use v4max::keycode::HidKeyCode;
use v4max::layer::Layer;
use v4max::layout::LED_COUNT;
use v4max::virtual_host::VirtualHost;

mod print;

/// Preview the Keychron V4 Max keymap
#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Keymap profile: `v4-max` or `legacy`
    #[clap(long, short, global = true, default_value = "v4-max")]
    profile: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the layer tables
    Keymap(KeymapArgs),
    /// Render one lighting frame
    Lights(LightsArgs),
    /// Feed key events through the keymap hooks, e.g. `lctrl+ grave+ grave- lctrl-`
    Replay(ReplayArgs),
}

#[derive(Args)]
struct KeymapArgs {
    /// Only print this layer
    #[clap(long, short)]
    layer: Option<String>,
}

#[derive(Args)]
struct LightsArgs {
    /// Active layer
    #[clap(long, short, default_value = "base")]
    layer: String,
    /// Render with a ctrl key held
    #[clap(long)]
    ctrl: bool,
    /// Render with the base layer lighting turned off
    #[clap(long)]
    base_off: bool,
}

#[derive(Args)]
struct ReplayArgs {
    /// Key events: a keycode name followed by `+` for a press or `-` for a release
    #[clap(required = true)]
    events: Vec<String>,
}

fn parse_layer(name: &str, kind: ProfileKind) -> Result<Layer> {
    let layer = name.parse::<Layer>().with_context(|| format!("invalid layer `{name}`"))?;
    if layer.id() as usize >= kind.profile().keymap.num_layers() {
        bail!("profile {kind} has no {layer} layer");
    }
    Ok(layer)
}

fn keymap(kind: ProfileKind, args: &KeymapArgs) -> Result<()> {
    let keymap = kind.profile().keymap;
    let layers = match &args.layer {
        Some(name) => vec![parse_layer(name, kind)?],
        None => Layer::ALL
            .into_iter()
            .filter(|l| (l.id() as usize) < keymap.num_layers())
            .collect(),
    };

    for layer in layers {
        let Some(table) = keymap.layer(layer.id()) else {
            continue;
        };
        println!("[{layer}]");
        print!("{}", print::layer_table(table));
        println!();
    }
    Ok(())
}

fn lights(kind: ProfileKind, args: &LightsArgs) -> Result<()> {
    let layer = parse_layer(&args.layer, kind)?;
    let mut hooks = UserHooks::new(kind);
    let mut host = VirtualHost::new();
    host.layer_on(layer.id());
    hooks.state_mut().base_lighting = !args.base_off;
    if args.ctrl {
        hooks.process_record(HidKeyCode::LCtrl, true, &mut host);
    }
    debug!("Rendering {layer} layer with {:?}", hooks.state());

    hooks.render_indicators(&mut host, 0, LED_COUNT as u8);
    print!("{}", print::light_table(host.leds()));
    Ok(())
}

fn replay(kind: ProfileKind, args: &ReplayArgs) -> Result<()> {
    let mut hooks = UserHooks::new(kind);
    let mut host = VirtualHost::new();

    for event in &args.events {
        let KeyEvent { keycode, pressed } = event
            .parse::<KeyEvent>()
            .with_context(|| format!("invalid key event `{event}`"))?;
        host.clear_taps();
        let result = hooks.process_record(keycode, pressed, &mut host);
        if result == ProcessResult::Continue {
            host.process_key(keycode, pressed);
        }

        let taps: Vec<String> = host.taps().iter().map(|t| print::key_name(t.keycode)).collect();
        let layer = Layer::from_id(host.highest_layer()).map_or("?", Layer::name);
        println!(
            "{event:<12} {:<8} layer={layer:<9} taps=[{}]",
            if result.as_bool() { "continue" } else { "stop" },
            taps.join(", ")
        );
    }

    let state = hooks.state();
    println!(
        "left_ctrl={} right_ctrl={} base_lighting={}",
        state.left_ctrl, state.right_ctrl, state.base_lighting
    );
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let kind = cli
        .profile
        .parse::<ProfileKind>()
        .with_context(|| format!("invalid profile `{}`", cli.profile))?;

    match &cli.command {
        Commands::Keymap(args) => keymap(kind, args),
        Commands::Lights(args) => lights(kind, args),
        Commands::Replay(args) => replay(kind, args),
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("{err:#}");
        process::exit(1);
    }
}
