// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive console front end for the root classifier.
//!
//! Prompts for the three coefficients of `a·x^2 + b·x + c = 0`, echoes the
//! equation back for confirmation, and prints the classification. This is
//! deliberately the whole of the I/O layer; the library itself never reads
//! or prints anything.

use std::io::{self, BufRead, Write};

use quadroots::{Coeffs, Roots};

fn read_coef(input: &mut impl BufRead, name: &str) -> io::Result<f64> {
    loop {
        print!("{name}: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        match line.trim().parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Please, try again"),
        }
    }
}

fn confirm(input: &mut impl BufRead, eq: Coeffs) -> io::Result<bool> {
    println!("Is it your equation? [Y]es [N]o");
    println!("{eq}");
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let eq = loop {
        println!("Please, enter coefficients:");
        let a = read_coef(&mut input, "a")?;
        let b = read_coef(&mut input, "b")?;
        let c = read_coef(&mut input, "c")?;
        let eq = Coeffs::new(a, b, c);
        if confirm(&mut input, eq)? {
            break eq;
        }
        println!("Please, try again");
    };

    match eq.roots() {
        Roots::None => println!("No roots"),
        Roots::One(x) => println!("The only root: {x}"),
        Roots::Two(x1, x2) => {
            println!("First root: {x1}");
            println!("Second root: {x2}");
        }
        Roots::All => println!("Infinite number of roots"),
        Roots::Undefined => println!("The equation was not solved"),
    }
    Ok(())
}
