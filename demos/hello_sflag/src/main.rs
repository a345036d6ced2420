//! Walkthrough binary for the `sflag` derive.
//!
//! ```text
//! hello_sflag --iq=100 --verbose=true some positional args
//! ```

use sflag::Sflag;

#[derive(Debug, Default, Sflag)]
struct Options {
    #[sflag("sflag demonstrator")]
    usage: String,
    #[sflag("contains the something      | /dev/null")]
    some_file: String,
    #[sflag("do not inflate              | 42")]
    iq: i64,
    #[sflag("in Vietnamese Dong          | 42000000000000000000000000.0")]
    gdp: f64,
    #[sflag("in milliseconds since epoch | 42000000000000")]
    age: i64,
    #[sflag("! is command that might contain pipe char ! 'yes | head'")]
    some_command: String,
    #[sflag(
        "Bool flags require use of an equals sign syntax (i.e. \"var=value\") to be unambiguous | false"
    )]
    verbose: bool,
    #[sflag(" must be writable | /an/output/file")]
    out_data: String,
    args: Vec<String>,
}

#[expect(clippy::print_stdout, reason = "demo prints the bound values")]
fn main() {
    let mut opt = Options::default();
    sflag::parse(&mut opt);
    println!("SomeFile= {}", opt.some_file);
    println!("Age= {}", opt.age);
    println!("IQ= {}", opt.iq);
    println!("GDP= {}", opt.gdp);
    println!("SomeCommand= {}", opt.some_command);
    println!("Verbose= {}", opt.verbose);
    println!("OutData= {}", opt.out_data);
    for (index, arg) in opt.args.iter().enumerate() {
        println!("arg num {index} : {arg}");
    }
    if opt.verbose {
        println!("{}", opt.usage);
    }
}
