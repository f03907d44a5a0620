use std::path::PathBuf;

use image::RgbaImage;

fn bin_path() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_fadeloop")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "fadeloop.exe"
            } else {
                "fadeloop"
            });
            p
        })
}

#[test]
fn cli_writes_a_gif() {
    let dir = PathBuf::from("target").join("cli_smoke");
    let input = dir.join("input");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&input).unwrap();

    for (name, color) in [("a.png", [255, 0, 0, 255]), ("b.png", [0, 0, 255, 255])] {
        let img = RgbaImage::from_pixel(4, 4, image::Rgba(color));
        img.save(input.join(name)).unwrap();
    }

    let out_path = dir.join("out.gif");
    let status = std::process::Command::new(bin_path())
        .args([
            "--input",
            input.to_string_lossy().as_ref(),
            "--output",
            out_path.to_string_lossy().as_ref(),
            "--duration",
            "50",
            "--transition",
            "2",
            "--delay",
            "100",
        ])
        .status()
        .unwrap();

    assert!(status.success());
    assert!(out_path.exists());
}

#[test]
fn cli_reports_missing_images_cleanly() {
    let dir = PathBuf::from("target").join("cli_smoke_empty");
    let input = dir.join("input");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&input).unwrap();

    let out_path = dir.join("out.gif");
    let output = std::process::Command::new(bin_path())
        .args([
            "--input",
            input.to_string_lossy().as_ref(),
            "--output",
            out_path.to_string_lossy().as_ref(),
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no images found"));
    assert!(!out_path.exists());
}

#[test]
fn cli_rejects_malformed_crop() {
    let dir = PathBuf::from("target").join("cli_smoke_crop");
    let input = dir.join("input");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&input).unwrap();

    let img = RgbaImage::from_pixel(4, 4, image::Rgba([1, 2, 3, 255]));
    img.save(input.join("a.png")).unwrap();

    let output = std::process::Command::new(bin_path())
        .args([
            "--input",
            input.to_string_lossy().as_ref(),
            "--output",
            dir.join("out.gif").to_string_lossy().as_ref(),
            "--crop",
            "1,2,3",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid crop box"));
}
