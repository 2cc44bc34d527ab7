use boca_maker::error::NiceError;
use boca_maker::{main_contest, Opt};

fn main() {
    let opt = Opt::from_env();
    opt.logger.enable_log();

    main_contest(opt).nice_unwrap()
}
