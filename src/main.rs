use std::io::{self, Write};
use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;
use num_bigint::RandBigInt;
use num_traits::One;

use rsa_textbook::util::display::{hex_block, HEX_LINE_WIDTH};
use rsa_textbook::{decrypt, encrypt, generate_keypair_with_rng, KeyGenConfig, RsaBigInt};

/// CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "rsa-textbook",
    about = "Generate an RSA keypair, then encrypt and decrypt a random plaintext"
)]
struct Args {
    /// Bit length of the modulus. Prompted for when omitted.
    #[arg(short = 'b', long = "bits")]
    bits: Option<usize>,

    /// Hex digits per output line.
    #[arg(short = 'w', long = "width", default_value_t = HEX_LINE_WIDTH)]
    width: usize,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    println!("This RSA demo lets you choose a key size in bits. It computes the keys,");
    println!("picks a random plaintext, and shows the plaintext, its cipher, and the");
    println!("result of decrypting that cipher.\n");

    let bits = match args.bits {
        Some(bits) => bits,
        None => prompt_bits()?,
    };

    let mut rng = rand::thread_rng();
    let keypair = generate_keypair_with_rng(&mut rng, bits, &KeyGenConfig::default())
        .with_context(|| format!("failed to generate a {}-bit keypair", bits))?;

    let public = keypair.public_key();
    let private = keypair.private_key();

    let plaintext = rng.gen_biguint_range(&RsaBigInt::one(), public.n());
    let cipher = encrypt(&plaintext, public.e(), public.n());
    let decrypted = decrypt(&cipher, private.d(), public.n());

    print_block("Our plaintext (in hex):", &plaintext, args.width);
    print_block("Is encrypted to (in hex):", &cipher, args.width);
    print_block("Then decrypted to (in hex):", &decrypted, args.width);

    let matches = plaintext == decrypted;
    println!("Is plaintext = decrypted cipher? {}", matches);
    if matches {
        println!("Job done");
        Ok(())
    } else {
        println!("Oops");
        bail!("decrypted value does not match the plaintext")
    }
}

fn prompt_bits() -> Result<usize> {
    print!("Please enter encryption level (bit length): ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read bit length")?;

    line.trim()
        .parse()
        .with_context(|| format!("invalid bit length: {:?}", line.trim()))
}

fn print_block(title: &str, value: &RsaBigInt, width: usize) {
    println!("{}", title);
    println!("{}\n", hex_block(value, width));
}
