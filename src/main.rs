extern crate sdl2;
extern crate gl;
extern crate backtrace;
#[macro_use]
extern crate log;
extern crate env_logger;
#[macro_use]
extern crate static_assertions;
#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

use std::env;
use std::io::Write;
use std::process;
use std::time::{Instant, Duration};

use log::LevelFilter;

pub mod v;
pub mod shader;
pub mod gx;
pub mod grx;
pub mod platform;
pub mod mesh;
pub mod game;

use game::Game;

fn main() {
    setup_panic_hook();
    setup_env();
    setup_log();

    let mut game = match Game::new() {
        Ok(game) => game,
        Err(e) => {
            error!("Failed to start up:\n{}", e);
            process::exit(-1);
        },
    };

    let size = game.platform.window_size();
    info!("Opened {}x{} window `BioSim`", size.w, size.h);

    let mut event_pump = match game.platform.sdl.event_pump() {
        Ok(pump) => pump,
        Err(e) => {
            error!("Failed to obtain the SDL2 event pump: {}", e);
            process::exit(-1);
        },
    };

    let mut frame_accum = 0_u64;
    let mut last_time = Instant::now();
    let fps_counter_interval = Duration::from_millis(1000);

    'running: loop {
        if game.should_quit {
            break 'running;
        }

        game.render_clear();
        game.render();

        for event in event_pump.poll_iter() {
            game.handle_sdl2_event(&event);
        }
        game.process_input(&event_pump.keyboard_state());

        game.present();

        frame_accum += 1;
        let current_time = Instant::now();
        if current_time.duration_since(last_time) > fps_counter_interval {
            info!("{} frames in the last second ({:.3} milliseconds/frame)",
                frame_accum, 1000_f64 / (frame_accum as f64));
            frame_accum = 0;
            last_time = current_time;
        }
    }

    info!("Window closed after {} frames", game.frame);
}

fn setup_panic_hook() {
    use std::panic;

    panic::set_hook(Box::new(|info| {
        let location = match info.location() {
            Some(location) => format!("in file '{}' at line {}", location.file(), location.line()),
            None => "in unknown location".to_owned(),
        };
        let reason = if let Some(s) = info.payload().downcast_ref::<&str>() {
            *s
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.as_str()
        } else {
            "<unknown reason>"
        };
        error!("Panic occurred {}:\n{}", location, reason);

        info!("Backtrace:");
        ::backtrace::trace(|frame| {
            ::backtrace::resolve(frame.ip(), |symbol| {
                let what = || "??".to_owned();
                let filename = symbol.filename().map(|p| format!("{}", p.display())).unwrap_or_else(what);
                let lineno = symbol.lineno().map(|l| format!("{}", l)).unwrap_or_else(what);
                // NOTE: Do use the Display implementation for name. It demangles the symbol.
                let name = symbol.name().map(|n| format!("{}", n)).unwrap_or_else(what);
                info!("{}:{}: {}", &filename, &lineno, name);
            });
            true // keep going to the next frame
        });
    }));
}

fn setup_env() {
    env::set_var("RUST_BACKTRACE", "full");
}

fn setup_log() {
    let mut builder = env_logger::Builder::new();

    builder.format(|buf, record| {
        let s = format!("{}", record.level());
        let s = s.chars().next().unwrap();
        writeln!(buf, "[{}] {}", s, record.args())
    }).filter(None, LevelFilter::Info);

    if let Ok(rust_log) = env::var("RUST_LOG") {
        builder.parse(&rust_log);
    }
    builder.init();
}
