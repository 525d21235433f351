use getopts::Options;
use log::*;
use phongtrace::image::Image;
use phongtrace::renderer::{RenderConfig, Renderer};
use phongtrace::*;
use std::process;
use std::str::FromStr;

fn print_usage(program: &str, opts: &Options) {
    let brief = format!("Usage: {} [options]", program);
    eprint!("{}", opts.usage(&brief));
}

fn parse_opt<T: FromStr>(
    matches: &getopts::Matches,
    name: &str,
    default: T,
    program: &str,
    opts: &Options,
) -> T {
    match matches.opt_str(name) {
        None => default,
        Some(s) => s.parse().unwrap_or_else(|_| {
            eprintln!("invalid value for --{}: {}", name, s);
            print_usage(program, opts);
            process::exit(2)
        }),
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let program = args[0].clone();
    let mut opts = Options::new();
    opts.optopt("o", "output", "output PPM file", "FILE");
    opts.optopt("s", "size", "image width and height in pixels", "PIXELS");
    opts.optopt("n", "samples", "samples per pixel", "N");
    opts.optopt("w", "wall-size", "side of the wall the image covers", "F");
    opts.optopt("", "scene", "sphere | squashed | trio", "NAME");
    opts.optflag("h", "help", "print this help menu");
    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{}", e);
            print_usage(&program, &opts);
            process::exit(2);
        }
    };
    if matches.opt_present("h") {
        print_usage(&program, &opts);
        return;
    }

    let defaults = RenderConfig::default();
    let config = RenderConfig {
        samples_per_pixel: parse_opt(&matches, "samples", 1usize, &program, &opts),
        wall_size: parse_opt(&matches, "wall-size", defaults.wall_size, &program, &opts),
        ..defaults
    };
    let size: u32 = parse_opt(&matches, "size", 100, &program, &opts);
    let output = matches
        .opt_str("output")
        .unwrap_or_else(|| "output/output.ppm".to_string());
    let scene_name = matches.opt_str("scene").unwrap_or_else(|| "sphere".to_string());

    if let Err(e) = run(&scene_name, config, size, &output) {
        error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(scene_name: &str, config: RenderConfig, size: u32, output: &str) -> Result<()> {
    let scene = match example_scenes::by_name(scene_name)? {
        Some(scene) => scene,
        None => {
            eprintln!(
                "unknown scene {:?}, expected one of {:?}",
                scene_name,
                example_scenes::NAMES
            );
            process::exit(2);
        }
    };

    let mut image = Image::new(size, size);
    Renderer::new(config).render(&scene.spheres, &scene.light, &mut image)?;
    image.save_ppm(output)?;
    info!("wrote {}", output);
    Ok(())
}
