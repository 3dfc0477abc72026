use std::error::Error;
use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

fn bytewords_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bytewords"))
}

fn run(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(bytewords_command().args(args).output()?)
}

#[test]
fn encode_and_decode_hex() -> Result<(), Box<dyn Error>> {
    let encode = run(&["encode", "00"])?;
    assert!(
        encode.status.success(),
        "encode failed: {}",
        String::from_utf8_lossy(&encode.stderr)
    );
    assert_eq!(String::from_utf8(encode.stdout)?.trim(), "able tied also webs lung");

    let decode = run(&["decode", "able tied also webs lung"])?;
    assert!(decode.status.success());
    assert_eq!(String::from_utf8(decode.stdout)?.trim(), "00");

    // unquoted words are rejoined with the style separator
    let split = run(&["decode", "able", "tied", "also", "webs", "lung"])?;
    assert!(split.status.success());
    assert_eq!(String::from_utf8(split.stdout)?.trim(), "00");

    Ok(())
}

#[test]
fn minimal_and_uri_styles() -> Result<(), Box<dyn Error>> {
    let minimal = run(&["encode", "--style", "minimal", "deadbeef"])?;
    assert_eq!(String::from_utf8(minimal.stdout)?.trim(), "uepmrnwskensotht");

    let uri = run(&["decode", "--style", "uri", "able-tied-also-webs-lung"])?;
    assert!(uri.status.success());
    assert_eq!(String::from_utf8(uri.stdout)?.trim(), "00");

    Ok(())
}

#[test]
fn file_roundtrip() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("secret.bin");
    let words = dir.path().join("words.txt");
    let recovered = dir.path().join("recovered.bin");

    let payload: Vec<u8> = (0..100).map(|i| (i * 13 % 256) as u8).collect();
    fs::write(&input, &payload)?;

    let encode = run(&["encode", "--style", "uri", "--file", input.to_str().unwrap()])?;
    assert!(
        encode.status.success(),
        "encode failed: {}",
        String::from_utf8_lossy(&encode.stderr)
    );
    fs::write(&words, &encode.stdout)?;

    let decode = run(&[
        "decode",
        "--style",
        "uri",
        "--file",
        words.to_str().unwrap(),
        "--output",
        recovered.to_str().unwrap(),
    ])?;
    assert!(
        decode.status.success(),
        "decode failed: {}",
        String::from_utf8_lossy(&decode.stderr)
    );
    assert!(String::from_utf8(decode.stdout)?.contains("Decoded 100 bytes"));
    assert_eq!(fs::read(&recovered)?, payload);

    Ok(())
}

#[test]
fn checksum_failure_exits_nonzero() -> Result<(), Box<dyn Error>> {
    let output = run(&["decode", "able tied also webs luck"])?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Checksum mismatch"), "stderr: {}", stderr);
    Ok(())
}

#[test]
fn unknown_style_rejected() -> Result<(), Box<dyn Error>> {
    let output = run(&["encode", "--style", "emoji", "00"])?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid style"));
    Ok(())
}

#[test]
fn inspect_shard_json() -> Result<(), Box<dyn Error>> {
    let encode = run(&["encode", "--style", "minimal", "be12120204aabbcc"])?;
    let text = String::from_utf8(encode.stdout)?;

    let inspect = run(&["inspect", "--style", "minimal", "--json", text.trim()])?;
    assert!(
        inspect.status.success(),
        "inspect failed: {}",
        String::from_utf8_lossy(&inspect.stderr)
    );
    let value: serde_json::Value = serde_json::from_slice(&inspect.stdout)?;
    assert_eq!(value["group_threshold"], 2);
    assert_eq!(value["group_count"], 3);
    assert_eq!(value["share_value"], "aabbcc");
    Ok(())
}

#[test]
fn version_flag_prints_build_information() -> Result<(), Box<dyn Error>> {
    let output = run(&["--version"])?;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with(&format!("bytewords {} ", env!("CARGO_PKG_VERSION"))),
        "unexpected version line: {}",
        stdout
    );
    assert!(
        stdout.contains("development") || stdout.contains("release"),
        "version output should name the build profile: {}",
        stdout
    );
    Ok(())
}

#[test]
fn build_leaves_source_tree_untouched() {
    let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    assert!(
        !manifest_dir.join("BUILD_NUMBER").exists(),
        "build script must not write into the package directory"
    );
}

#[test]
fn running_without_subcommand_displays_help() -> Result<(), Box<dyn Error>> {
    let output = bytewords_command().output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("encode"));
    assert!(stdout.contains("decode"));
    Ok(())
}
