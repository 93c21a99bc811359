use std::process::exit;

use log::error;

mod cmd_args;
mod errors;
mod workflow;

pub fn main()
{
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_args::setup_logger(&options);

    let result = workflow::run(&options);

    if result.is_err()
    {
        println!();
        error!(
            " Could not complete workflow, reason {:?}",
            result.err().unwrap()
        );

        println!();
        exit(-1);
    }
}
