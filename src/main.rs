use prepare_cmake_config::rewrite_template_file;
use std::env;
use std::io;
use std::path::Path;
use std::process;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Bad number of arguments");
        eprintln!("Usage: {} <input_path> <output_path>", args[0]);
        process::exit(1);
    }

    rewrite_template_file(Path::new(&args[1]), Path::new(&args[2]))
}
