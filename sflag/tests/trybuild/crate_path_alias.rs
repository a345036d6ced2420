//! Verifies that `#[sflag(crate = "...")]` is accepted when the runtime is
//! reached through a re-export.

mod deps {
    pub use sflag;
}

#[derive(Debug, Default, deps::sflag::Sflag)]
#[sflag(crate = "deps::sflag")]
struct AliasConfig {
    #[sflag("value | hello")]
    value: String,
    #[sflag("count | 1")]
    count: i64,
}

fn main() {
    let mut config = AliasConfig::default();
    let result = deps::sflag::try_parse_from(&mut config, ["alias"]);
    let _: Result<(), deps::sflag::SflagError> = result;
}
