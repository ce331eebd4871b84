//! Script scenarios run through the interpreter against files on disk.

mod common;

use common::{assert_all_executed, assert_image, fixtures, TestWorkspace};
use imagelab::models::AppConfig;
use imagelab::script::Flow;
use pretty_assertions::assert_eq;

#[test]
fn test_split_brighten_combine_pipeline() {
    let mut ws = TestWorkspace::new();
    ws.write("base.ppm", fixtures::BASE_PPM);

    let flow = ws.run(
        "load base.ppm base
rgb-split base red green blue
intensity-component base intensity
brighten 50 red bright-red
brighten -20 blue reduced-blue
rgb-combine result bright-red intensity reduced-blue
save result.ppm result
",
    );

    assert_eq!(flow, Flow::Continue);
    assert_all_executed(&ws);
    assert_eq!(ws.output().len(), 7);

    let expected = fixtures::image(&[
        &[(255, 85, 0), (50, 85, 0), (50, 85, 235)],
        &[(50, 0, 0), (255, 153, 31), (255, 255, 235)],
    ]);
    assert_image(&ws, "result", &expected);

    let saved = ws.read("result.ppm");
    assert!(saved.starts_with("P3\n3 2\n255\n255\n85\n0\n50\n85\n0\n"));
}

#[test]
fn test_split_combine_round_trip_on_disk() {
    let mut ws = TestWorkspace::new();
    ws.write("base.ppm", fixtures::BASE_PPM);

    ws.run(
        "load base.ppm base
rgb-split base r g b
rgb-combine again r g b
save again.ppm again
load again.ppm reloaded
",
    );

    assert_all_executed(&ws);
    assert_image(&ws, "reloaded", &fixtures::base());
}

#[test]
fn test_blur_sepia_dither_fixtures() {
    let mut ws = TestWorkspace::new();
    ws.write("base.ppm", fixtures::BASE_3X3_PPM);

    ws.run(
        "load base.ppm base
blur base blurred
sepia base sepia
dither base dithered
",
    );

    assert_all_executed(&ws);
    assert_image(
        &ws,
        "blurred",
        &fixtures::image(&[
            &[(80, 41, 3), (80, 99, 54), (48, 73, 99)],
            &[(83, 65, 54), (150, 138, 109), (131, 134, 119)],
            &[(54, 69, 99), (124, 108, 119), (118, 113, 70)],
        ]),
    );
    assert_image(
        &ws,
        "sepia",
        &fixtures::image(&[
            &[(100, 89, 69), (196, 175, 136), (48, 43, 33)],
            &[(0, 0, 0), (228, 203, 158), (255, 255, 239)],
            &[(232, 206, 161), (165, 146, 114), (255, 244, 190)],
        ]),
    );
    assert_image(
        &ws,
        "dithered",
        &fixtures::greys(&[&[0, 255, 0], &[0, 255, 255], &[255, 0, 255]]),
    );
}

#[test]
fn test_greyscale_methods() {
    let mut ws = TestWorkspace::new();
    ws.write("base.ppm", fixtures::BASE_PPM);

    ws.run(
        "load base.ppm base
greyscale base luma
greyscale blue-component base blue
",
    );

    assert_eq!(
        ws.output(),
        vec![
            "Executed command: load",
            "Executed command: greyscale",
            "Executed command: greyscale",
        ]
    );
    assert_image(
        &ws,
        "luma",
        &fixtures::greys(&[&[55, 182, 18], &[0, 168, 255]]),
    );
    assert_image(
        &ws,
        "blue",
        &fixtures::greys(&[&[0, 0, 255], &[0, 51, 255]]),
    );
}

#[test]
fn test_errors_do_not_stop_the_script() {
    let mut ws = TestWorkspace::new();
    ws.write("base.ppm", fixtures::BASE_PPM);

    ws.run(
        "load base base
load base.ppm base
brighten lots base out
vertical-flip base1 out
vertical-flip base out
",
    );

    assert_eq!(
        ws.output(),
        vec![
            "Failed to load the image at filepath: base: File extension is necessary.",
            "Executed command: load",
            "Invalid command format",
            "Image not found: base1",
            "Executed command: vertical-flip",
        ]
    );
}

#[test]
fn test_stop_on_error_aborts() {
    let mut ws = TestWorkspace::with_config(AppConfig {
        stop_on_error: true,
        ..Default::default()
    });
    ws.write("base.ppm", fixtures::BASE_PPM);

    let flow = ws.run("load base.ppm base\nsepia nothing out\nsepia base out\n");

    assert_eq!(flow, Flow::Abort);
    assert_eq!(
        ws.output(),
        vec!["Executed command: load", "Image not found: nothing"]
    );
}

#[test]
fn test_nested_script_shares_registry() {
    let mut ws = TestWorkspace::new();
    ws.write("base.ppm", fixtures::BASE_PPM);
    ws.write("inner.txt", "# inner\nload base.ppm base\nsepia base toned\n");

    ws.run("run inner.txt\nsave toned.png toned\n");

    assert_all_executed(&ws);
    assert!(ws.interpreter.engine().registry().contains("toned"));
    assert!(ws.exists("toned.png"));
    common::assert_png(&std::fs::read(ws.path("toned.png")).unwrap());
}

#[test]
fn test_quit_in_nested_script_stops_everything() {
    let mut ws = TestWorkspace::new();
    ws.write("base.ppm", fixtures::BASE_PPM);
    ws.write("inner.txt", "load base.ppm base\nquit\nblur base never\n");

    let flow = ws.run("run inner.txt\nblur base after\n");

    assert_eq!(flow, Flow::Quit);
    let registry = ws.interpreter.engine().registry();
    assert!(registry.contains("base"));
    assert!(!registry.contains("never"));
    assert!(!registry.contains("after"));
}

#[test]
fn test_recursive_script_is_bounded() {
    let mut ws = TestWorkspace::with_config(AppConfig {
        max_script_depth: 3,
        ..Default::default()
    });
    ws.write("self.txt", "run self.txt\n");

    let flow = ws.run("run self.txt\n");

    assert_eq!(flow, Flow::Continue);
    let output = ws.output();
    assert_eq!(output[0], "Scripts nested deeper than 3 levels");
    assert_eq!(&output[1..], ["Executed command: run"; 3]);
}

#[test]
fn test_missing_script_is_reported() {
    let mut ws = TestWorkspace::new();

    ws.run("run nowhere.txt\n");

    assert_eq!(ws.output(), vec!["Script file not found: nowhere.txt"]);
}

#[test]
fn test_histogram_csv_written() {
    let mut ws = TestWorkspace::new();
    ws.write("base.ppm", fixtures::BASE_PPM);

    ws.run("load base.ppm base\nhistogram base base.csv\n");

    assert_all_executed(&ws);
    let csv = ws.read("base.csv");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 257);
    assert_eq!(lines[0], "value,red,green,blue,intensity");
    // intensity: 0 (black), 85 x3, 153 (orange), 255 (white)
    assert_eq!(lines[1], "0,3,3,3,1");
    assert_eq!(lines[86], "85,0,0,0,3");
    assert_eq!(lines[154], "153,0,1,0,1");
    assert_eq!(lines[256], "255,3,2,2,1");
}
