use std::path::PathBuf;

use maskgen::MaskDocument;

#[test]
fn cli_writes_three_preset_masks() {
    let dir = PathBuf::from("target").join("cli_smoke_masks");
    let _ = std::fs::remove_dir_all(&dir);

    let exe = std::env::var_os("CARGO_BIN_EXE_maskgen")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "maskgen.exe"
            } else {
                "maskgen"
            });
            p
        });

    let out_arg = dir.to_string_lossy().to_string();
    let status = std::process::Command::new(exe)
        .args(["--out", out_arg.as_str(), "--size", "8"])
        .status()
        .unwrap();
    assert!(status.success());

    let mut names: Vec<String> = std::fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    assert_eq!(names, ["balanced.json", "light.json", "strong.json"]);

    for name in names {
        let s = std::fs::read_to_string(dir.join(&name)).unwrap();
        let doc: MaskDocument = serde_json::from_str(&s).unwrap();
        doc.validate().unwrap();
        assert_eq!(doc.w, 8);
        assert_eq!(doc.h, 8);
        assert_eq!(doc.channels, 3);
        assert_eq!(doc.data.len(), 192);
    }
}

#[test]
fn cli_rejects_zero_size() {
    let dir = PathBuf::from("target").join("cli_smoke_zero");
    let _ = std::fs::remove_dir_all(&dir);

    let exe = std::env::var_os("CARGO_BIN_EXE_maskgen")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target").join("debug").join("maskgen"));

    let out_arg = dir.to_string_lossy().to_string();
    let output = std::process::Command::new(exe)
        .args(["--out", out_arg.as_str(), "--size", "0"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid argument"), "stderr: {stderr}");
}
