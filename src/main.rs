use calc_ledger::engine::{factorial, fibonacci_sequence, is_prime, median};
use calc_ledger::{Calculator, CalculatorConfig, IntegerCalculator, OperationOutcome};
use eyre::{Result, WrapErr};

fn main() -> Result<()> {
    color_eyre::install().ok();
    env_logger::init();

    log::info!("calc-ledger demo starting");

    // Optional JSON config as the only argument
    let config = match std::env::args().nth(1) {
        Some(path) => CalculatorConfig::from_json_file(path)?,
        None => CalculatorConfig::new("Double Calculator", 4),
    };

    run_double_demo(&config)?;
    run_integer_demo()?;
    run_math_utils()?;

    log::info!("calc-ledger demo finished");

    Ok(())
}

fn report<T: std::fmt::Display>(label: &str, outcome: OperationOutcome<T>) {
    match outcome {
        Ok(value) => println!("{label} = {value}"),
        Err(err) => println!("{label}: error: {err}"),
    }
}

fn run_double_demo(config: &CalculatorConfig) -> Result<()> {
    let mut calc: Calculator = Calculator::from_config(config)
        .wrap_err_with(|| format!("Failed to create calculator '{}'", config.name))?;

    println!("=== {} (precision {}) ===", calc.name(), calc.precision());
    report("10.5 + 5.3", calc.add(10.5, 5.3));
    report("20.8 - 8.2", calc.subtract(20.8, 8.2));
    report("6.5 * 7.2", calc.multiply(6.5, 7.2));
    report("15.6 / 3.2", calc.divide(15.6, 3.2));
    report("8.5^2", calc.square(8.5));
    report("2^10", calc.power(2.0, 10.0));
    report("sqrt(16)", calc.square_root(16.0));

    let numbers = [1.5, 2.3, 3.7, 4.1, 5.9];
    report("average", calc.average(&numbers));
    report(
        "variance",
        calc.apply_function(&numbers, |nums| {
            let mean = nums.iter().sum::<f64>() / nums.len() as f64;
            nums.iter().map(|n| (n - mean).powi(2)).sum::<f64>() / nums.len() as f64
        }),
    );

    println!("\nError handling:");
    report("10 / 0", calc.divide(10.0, 0.0));
    report("sqrt(-4)", calc.square_root(-4.0));
    report("10^400", calc.power(10.0, 400.0));

    println!("\nHistory ({} entries):", calc.history_size());
    for entry in calc.history_entries() {
        println!("  {entry} (at {})", entry.recorded_at().to_rfc3339());
    }

    println!("\nHistory summary:");
    for (kind, count) in calc.history_summary() {
        println!("  {kind}: {count} times");
    }

    let json = serde_json::to_string_pretty(calc.history_entries())
        .wrap_err("Failed to serialize history")?;
    log::debug!("History as JSON:\n{json}");

    Ok(())
}

fn run_integer_demo() -> Result<()> {
    let mut calc = IntegerCalculator::integer("Integer Calculator")?;

    println!("\n=== {} ===", calc.name());
    report("15 + 7", calc.add(15, 7));
    report("20 - 8", calc.subtract(20, 8));
    report("6 * 7", calc.multiply(6, 7));
    report("15 / 3", calc.divide(15, 3));
    report("17 % 5", calc.modulo(17, 5));
    report("gcd(48, 18)", calc.gcd(48, 18));
    report("lcm(12, 8)", calc.lcm(12, 8));

    Ok(())
}

fn run_math_utils() -> Result<()> {
    println!("\n=== Math Utilities ===");
    report("5!", factorial(5));
    println!("Is 17 prime? {}", if is_prime(17) { "Yes" } else { "No" });

    let fib = fibonacci_sequence(10)?;
    let fib: Vec<String> = fib.iter().map(u64::to_string).collect();
    println!("First 10 Fibonacci numbers: {}", fib.join(", "));

    report("median of [1, 3, 2, 5, 4]", median(&[1.0, 3.0, 2.0, 5.0, 4.0]));

    Ok(())
}
