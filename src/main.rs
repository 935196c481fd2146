use battle_display::battle::BattleDisplay;
use battle_display::combat::CombatResult;
use battle_display::config::{ConfigStore, LoadOutcome, PluginParams};
use battle_display::fonts::FontCatalog;
use battle_display::input::{HostAction, InputContext, InputSystem};
use battle_display::render::{render_battle_log, MenuRenderer, PopupRenderer};
use battle_display::render::text::draw_simple_text;
use battle_display::scene::{open_configuration_screen, Screen, ScreenStack};
use battle_display::settings::SettingsCommand;
use battle_display::storage::{FileStore, MemoryStore};
use clap::Parser;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// Game resolution constants
const GAME_WIDTH: u32 = 640;
const GAME_HEIGHT: u32 = 360;

#[derive(Debug, Parser)]
#[command(name = "battle_display", about = "Battle display demo: floating damage numbers and settings screen")]
struct Args {
    /// Parameters file declaring the default fonts, colors and popup duration
    #[arg(long, default_value = "params.toml")]
    params: PathBuf,

    /// Directory scanned for font files
    #[arg(long, default_value = "assets/fonts")]
    fonts_dir: PathBuf,

    /// Where the saved settings live (defaults to the platform data dir)
    #[arg(long)]
    save_dir: Option<PathBuf>,
}

/// A stand-in for a battler, just a box with a name and a popup anchor
struct Battler {
    name: &'static str,
    rect: Rect,
    color: Color,
}

impl Battler {
    fn popup_anchor(&self) -> (f32, f32) {
        (self.rect.center().x() as f32, self.rect.top() as f32 - 12.0)
    }
}

/// Calculate the best window scale based on monitor size
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as i32;
            let usable_h = (display_mode.h as f32 * 0.9) as i32;
            let scale = (usable_w / GAME_WIDTH as i32).min(usable_h / GAME_HEIGHT as i32);
            scale.clamp(1, 4) as u32
        }
        Err(e) => {
            warn!(error = %e, "could not detect monitor size, using 2x scale");
            2
        }
    }
}

fn open_config_store(save_dir: Option<PathBuf>) -> ConfigStore {
    let dir = save_dir.unwrap_or_else(FileStore::default_directory);
    match FileStore::new(&dir) {
        Ok(store) => {
            info!(dir = %dir.display(), "using save directory");
            ConfigStore::new(store)
        }
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "save directory unavailable, settings will not persist");
            ConfigStore::new(MemoryStore::new())
        }
    }
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let params = PluginParams::from_file(&args.params).unwrap_or_else(|e| {
        warn!(path = %args.params.display(), error = %e, "ignoring parameters file");
        PluginParams::default()
    });
    let mut config = params.to_config();
    let catalog = FontCatalog::discover(&args.fonts_dir, &params.custom_fonts);

    let mut store = open_config_store(args.save_dir);
    if store.load(&mut config) == LoadOutcome::Loaded {
        info!(font = %config.font_face, size = config.font_size, "restored saved settings");
    }
    info!(fonts = catalog.len(), "font catalog ready");

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window_scale = calculate_window_scale(&video_subsystem);
    let window = video_subsystem
        .window("Battle Display", GAME_WIDTH * window_scale, GAME_HEIGHT * window_scale)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().accelerated().target_texture().build().map_err(|e| e.to_string())?;
    canvas.set_logical_size(GAME_WIDTH, GAME_HEIGHT).map_err(|e| e.to_string())?;
    let mut event_pump = sdl_context.event_pump()?;
    let texture_creator = canvas.texture_creator();

    let hero = Battler {
        name: "Hero",
        rect: Rect::new(120, 200, 48, 64),
        color: Color::RGB(70, 110, 200),
    };
    let slime = Battler {
        name: "Slime",
        rect: Rect::new(460, 216, 56, 48),
        color: Color::RGB(90, 180, 90),
    };

    let mut battle = BattleDisplay::new();
    let mut screens = ScreenStack::new();
    let mut input = InputSystem::new();
    let mut popup_renderer = PopupRenderer::new(&texture_creator);
    let menu_renderer = MenuRenderer::new("SETTINGS");
    let mut frame: u64 = 0;

    'running: loop {
        input.set_context(match screens.top() {
            Screen::Battle => InputContext::Battle,
            Screen::Settings(_) => InputContext::Settings,
        });

        // Vary amounts a little so consecutive hits don't look identical
        let amount = 5 + (frame % 23) as i32;

        for action in input.poll_events(&mut event_pump) {
            match action {
                HostAction::Quit => break 'running,
                HostAction::SimulateAttack => {
                    let (x, y) = slime.popup_anchor();
                    battle.on_display_damage(&config, &CombatResult::damage(slime.name, amount), x, y);
                }
                HostAction::SimulateCritical => {
                    let (x, y) = slime.popup_anchor();
                    let result = CombatResult::damage(slime.name, amount * 3).critical();
                    battle.on_display_damage(&config, &result, x, y);
                }
                HostAction::SimulateHeal => {
                    let (x, y) = hero.popup_anchor();
                    battle.on_display_damage(&config, &CombatResult::healing(hero.name, amount), x, y);
                }
                HostAction::SimulateMiss => {
                    let (x, y) = slime.popup_anchor();
                    battle.on_display_damage(&config, &CombatResult::miss(slime.name), x, y);
                }
                HostAction::SimulateEvade => {
                    let (x, y) = slime.popup_anchor();
                    battle.on_display_damage(&config, &CombatResult::evade(slime.name), x, y);
                }
                HostAction::OpenSettings => {
                    open_configuration_screen(&mut screens, &config, &catalog);
                }
                HostAction::MenuUp => {
                    if let Some(menu) = screens.settings_menu_mut() {
                        menu.select_previous();
                    }
                }
                HostAction::MenuDown => {
                    if let Some(menu) = screens.settings_menu_mut() {
                        menu.select_next();
                    }
                }
                HostAction::MenuConfirm => {
                    if let Some(menu) = screens.settings_menu_mut() {
                        menu.activate_selected(&mut config, &mut store);
                    }
                }
                HostAction::MenuCancel => {
                    if let Some(menu) = screens.settings_menu_mut() {
                        menu.activate(SettingsCommand::Cancel, &mut config, &mut store);
                    }
                }
            }
        }

        battle.on_tick();
        screens.pop_closed_menu();

        canvas.set_draw_color(Color::RGB(24, 24, 32));
        canvas.clear();

        // Ground line and battlers
        canvas.set_draw_color(Color::RGB(50, 50, 64));
        canvas.fill_rect(Rect::new(0, 264, GAME_WIDTH, GAME_HEIGHT - 264))?;
        for battler in [&hero, &slime] {
            canvas.set_draw_color(battler.color);
            canvas.fill_rect(battler.rect)?;
            draw_simple_text(
                &mut canvas,
                battler.name,
                battler.rect.x(),
                battler.rect.bottom() + 6,
                Color::RGB(200, 200, 210),
                1,
            )?;
        }

        draw_simple_text(
            &mut canvas,
            "SPACE HIT  C CRIT  H HEAL  M MISS  E EVADE  O SETTINGS",
            8,
            GAME_HEIGHT as i32 - 14,
            Color::RGB(140, 140, 150),
            1,
        )?;

        render_battle_log(&mut canvas, battle.log(), &config)?;
        popup_renderer.render_all(&mut canvas, &config, battle.popups())?;

        if let Screen::Settings(menu) = screens.top() {
            menu_renderer.render(&mut canvas, menu, &config)?;
        }

        canvas.present();
        frame += 1;

        // Cap framerate to ~60 FPS
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}
