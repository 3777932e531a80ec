//! Interactive CLI front-end for the workbench core.
//!
//! This binary carries no numerical-design content of its own: it reads
//! a menu choice and a handful of parameters from stdin, calls straight
//! into [`exprlab::parser`], [`exprlab::simplification`],
//! [`exprlab::numerics`] and [`exprlab::matrix`], and prints the result.
//! All diagnostic output goes through `eprintln!`/`println!` directly;
//! there is no logging framework to configure, matching the ambient
//! stack this crate's library half already follows.

use std::io::{self, BufRead, Write};

use exprlab::core::Expr;
use exprlab::error::ParseError;
use exprlab::matrix::Matrix;
use exprlab::numerics::{
    backward_difference, bisection, central_difference, forward_difference, newton_raphson,
    regula_falsi, simpson_one_third, simpson_three_eighths, trapezoid,
};
use exprlab::parser::parse;
use exprlab::simplification::optimize;

const BANNER: &str = "\
=================================================
  exprlab - numerical analysis workbench
=================================================";

const MENU: &str = "\
1) Bisection
2) Regula falsi
3) Newton-Raphson
4) Trapezoid rule
5) Simpson 1/3 rule
6) Simpson 3/8 rule
7) Forward difference
8) Backward difference
9) Central difference
10) Matrix (inverse / Gaussian elimination / Gauss-Seidel)
0) Exit";

fn main() -> std::process::ExitCode {
    println!("{BANNER}");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("\n{MENU}");
        print!("Select a method: ");
        drop(io::stdout().flush());
        let Some(Ok(choice)) = lines.next() else {
            eprintln!("Failed to read input");
            return std::process::ExitCode::FAILURE;
        };
        match choice.trim() {
            "0" => return std::process::ExitCode::SUCCESS,
            "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" | "10" => {
                match run_method(choice.trim(), &mut lines) {
                    Ok(()) => {}
                    Err(code) => return code,
                }
            }
            other => println!("Unrecognized choice: {other}"),
        }
    }
}

fn run_method(
    choice: &str,
    lines: &mut std::io::Lines<std::io::StdinLock<'_>>,
) -> Result<(), std::process::ExitCode> {
    if choice == "10" {
        return run_matrix_method(lines);
    }

    let expr = match read_expression(lines) {
        Ok(e) => e,
        Err(code) => return Err(code),
    };
    println!("Parsed:    {expr}");
    let expr = optimize(expr);
    println!("Optimized: {expr}");

    match choice {
        "1" | "2" => {
            let a = read_f64(lines, "a: ")?;
            let b = read_f64(lines, "b: ")?;
            let eps = read_f64(lines, "epsilon: ")?;
            let root = if choice == "1" {
                bisection(&expr, a, b, eps)
            } else {
                regula_falsi(&expr, a, b, eps)
            };
            if root.is_nan() {
                eprintln!("No root found in the interval");
                return Err(std::process::ExitCode::FAILURE);
            }
            println!("Root: {root}");
        }
        "3" => {
            let x0 = read_f64(lines, "x0: ")?;
            let eps = read_f64(lines, "epsilon: ")?;
            println!("Root: {}", newton_raphson(&expr, x0, eps));
        }
        "4" | "5" | "6" => {
            let a = read_f64(lines, "a: ")?;
            let b = read_f64(lines, "b: ")?;
            let n = read_u32(lines, "n: ")?;
            let result = match choice {
                "4" => trapezoid(&expr, a, b, n),
                "5" => simpson_one_third(&expr, a, b, n),
                _ => simpson_three_eighths(&expr, a, b, n),
            };
            if result.is_nan() {
                eprintln!("n must be even for Simpson 1/3");
                return Err(std::process::ExitCode::FAILURE);
            }
            println!("Integral: {result}");
        }
        _ => {
            let x = read_f64(lines, "x: ")?;
            let h = read_f64(lines, "h: ")?;
            let result = match choice {
                "7" => forward_difference(&expr, x, h),
                "8" => backward_difference(&expr, x, h),
                _ => central_difference(&expr, x, h),
            };
            println!("Derivative: {result}");
        }
    }
    Ok(())
}

fn run_matrix_method(
    lines: &mut std::io::Lines<std::io::StdinLock<'_>>,
) -> Result<(), std::process::ExitCode> {
    print!("Matrix operation (inverse/gauss/seidel): ");
    drop(io::stdout().flush());
    let Some(Ok(op)) = lines.next() else {
        eprintln!("Failed to read input");
        return Err(std::process::ExitCode::FAILURE);
    };
    let n = read_usize(lines, "matrix size n: ")?;
    if n == 0 {
        eprintln!("Matrix size must be at least 1");
        return Err(std::process::ExitCode::FAILURE);
    }
    let mut rows = Vec::with_capacity(n);
    for r in 0..n {
        let cols = if op.trim() == "gauss" { n + 1 } else { n };
        let mut row = Vec::with_capacity(cols);
        for c in 0..cols {
            row.push(read_f64(lines, &format!("a[{r}][{c}]: "))?);
        }
        rows.push(row);
    }
    let m = Matrix::from_rows(rows);

    match op.trim() {
        "inverse" => match m.inverse() {
            Some(inv) => {
                for r in 0..inv.rows() {
                    let row: Vec<String> = (0..inv.cols()).map(|c| inv.get(r, c).to_string()).collect();
                    println!("{}", row.join(" "));
                }
                Ok(())
            }
            None => {
                eprintln!("Matrix is singular");
                Err(std::process::ExitCode::FAILURE)
            }
        },
        "gauss" => match m.gaussian_elimination() {
            Some(x) => {
                println!("{x:?}");
                Ok(())
            }
            None => {
                eprintln!("System has no unique solution");
                Err(std::process::ExitCode::FAILURE)
            }
        },
        "seidel" => {
            let mut b = Vec::with_capacity(n);
            for i in 0..n {
                b.push(read_f64(lines, &format!("b[{i}]: "))?);
            }
            match m.gauss_seidel(&b, 1e-9, 1000) {
                Some(x) => {
                    println!("{x:?}");
                    Ok(())
                }
                None => {
                    eprintln!("System is not solvable by Gauss-Seidel iteration");
                    Err(std::process::ExitCode::FAILURE)
                }
            }
        }
        other => {
            eprintln!("Unrecognized matrix operation: {other}");
            Err(std::process::ExitCode::FAILURE)
        }
    }
}

fn read_expression(
    lines: &mut std::io::Lines<std::io::StdinLock<'_>>,
) -> Result<Expr, std::process::ExitCode> {
    print!("f(x) = ");
    drop(io::stdout().flush());
    let Some(Ok(text)) = lines.next() else {
        eprintln!("Failed to read input");
        return Err(std::process::ExitCode::FAILURE);
    };
    match parse(&text) {
        Ok(e) => Ok(e),
        Err(err) => {
            print_parse_error(&text, &err);
            Err(std::process::ExitCode::FAILURE)
        }
    }
}

/// Print a `[Failed to parse]` banner and a caret underline pointing at
/// the offending byte, in the same visual style the original program's
/// diagnostic output used.
fn print_parse_error(input: &str, err: &ParseError) {
    let prefix = "[Failed to parse]   ";
    println!("{prefix}{input}");
    let pointer = " ".repeat(prefix.len() + err.position());
    match err {
        ParseError::UnexpectedCharacter { .. } => {
            eprintln!("{pointer}^ Unexpected character.");
        }
        ParseError::ExpectedCharacter { expected, .. } => {
            eprintln!("{pointer}^ Expected '{expected}'.");
        }
        ParseError::EmptyFormula => {
            eprintln!("{pointer}^ Formula cannot be empty.");
        }
    }
}

fn read_f64(
    lines: &mut std::io::Lines<std::io::StdinLock<'_>>,
    prompt: &str,
) -> Result<f64, std::process::ExitCode> {
    print!("{prompt}");
    drop(io::stdout().flush());
    let Some(Ok(text)) = lines.next() else {
        eprintln!("Failed to read input");
        return Err(std::process::ExitCode::FAILURE);
    };
    text.trim().parse::<f64>().map_err(|_| {
        eprintln!("Invalid number: '{text}'");
        std::process::ExitCode::FAILURE
    })
}

fn read_u32(
    lines: &mut std::io::Lines<std::io::StdinLock<'_>>,
    prompt: &str,
) -> Result<u32, std::process::ExitCode> {
    print!("{prompt}");
    drop(io::stdout().flush());
    let Some(Ok(text)) = lines.next() else {
        eprintln!("Failed to read input");
        return Err(std::process::ExitCode::FAILURE);
    };
    text.trim().parse::<u32>().map_err(|_| {
        eprintln!("Invalid integer: '{text}'");
        std::process::ExitCode::FAILURE
    })
}

fn read_usize(
    lines: &mut std::io::Lines<std::io::StdinLock<'_>>,
    prompt: &str,
) -> Result<usize, std::process::ExitCode> {
    read_u32(lines, prompt).map(|v| usize::try_from(v).unwrap_or(0))
}
