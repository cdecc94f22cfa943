use dynamic_array::DynamicArray;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG controls verbosity, defaulting to warn.
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let mut arr = DynamicArray::from([1, 3, 7, 1, 0, 234, 12, 86, 111, 999, 53, 3]);
    arr.selection_sort();
    arr.reverse();
    arr.remove(&999);

    tracing::info!(size = arr.size(), "demo finished");
    println!("{arr}");
    Ok(())
}
