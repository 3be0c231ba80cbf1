use std::env::args_os;

use clap::Parser;
use eyre::Result;
use roofline_sim::{args::Args, run_main};
fn main() -> Result<()> {
    let args = args_os();
    let args = Args::parse_from(args);
    run_main::main(args)
}

#[cfg(test)]
mod test_main {

    use clap::Parser;
    use roofline_sim::args::Args;

    #[test]
    fn test_main() {
        let args = vec![
            "roofline_sim",
            "-r",
            "explore",
            "configs/default.toml",
            "configs/grids/fine.toml",
        ];
        let args = Args::parse_from(args);
        super::run_main::main(args).unwrap();
    }
}
