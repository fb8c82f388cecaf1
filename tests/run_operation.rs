use pixmat::pixel::PixelImage;
use pixmat::{run_operation, CLIParser};
use std::path::PathBuf;
use std::{env, fs};

const SCALE_INPUT_IMAGE_PATH: &str = "tests/scale_input.png";
const SCALE_RESULT_IMAGE_PATH: &str = "tests/scale_result.png";
const RESIZE_INPUT_IMAGE_PATH: &str = "tests/resize_input.png";
const RESIZE_RESULT_IMAGE_PATH: &str = "tests/resize_result.png";

fn get_project_root_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn get_absolute_path(relative: &str) -> PathBuf {
    let mut root_path = get_project_root_path();
    root_path.push(relative);
    root_path
}

fn cleanup(relative_paths: &[&str]) {
    for relative in relative_paths {
        let path = get_absolute_path(relative);
        if path.exists() && path.is_file() {
            fs::remove_file(path).expect("Deletion of test file failed");
        }
    }
}

fn write_uniform_input_image(relative: &str, value: u8) -> PathBuf {
    let path = get_absolute_path(relative);
    let mut image = PixelImage::blank(&path, 3, 16, 9);
    for index in 0..image.height() as usize {
        image.matrix_mut()[index].as_mut_slice().fill(value);
    }
    image.save(&path).expect("Saving the input image failed");
    path
}

#[test]
fn scale_an_image_end_to_end() {
    cleanup(&[SCALE_INPUT_IMAGE_PATH, SCALE_RESULT_IMAGE_PATH]);
    let input_path = write_uniform_input_image(SCALE_INPUT_IMAGE_PATH, 200);
    let result_path = get_absolute_path(SCALE_RESULT_IMAGE_PATH);
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        input_path.to_str().unwrap(),
        result_path.to_str().unwrap(),
        "--operation",
        "Scale",
        "--factor",
        "0.5",
    ]);
    run_operation(&arguments).expect("Operation failed");
    assert!(result_path.exists(), "Output file was not created");
    let result = PixelImage::open(&result_path).expect("Reopening the result failed");
    assert_eq!(result.width(), 16, "result width does not match");
    assert_eq!(result.height(), 9, "result height does not match");
    assert_eq!(result.matrix()[0][0], 100, "scaled value does not match");
}

#[test]
fn resize_an_image_end_to_end() {
    cleanup(&[RESIZE_INPUT_IMAGE_PATH, RESIZE_RESULT_IMAGE_PATH]);
    let input_path = write_uniform_input_image(RESIZE_INPUT_IMAGE_PATH, 60);
    let result_path = get_absolute_path(RESIZE_RESULT_IMAGE_PATH);
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        input_path.to_str().unwrap(),
        result_path.to_str().unwrap(),
        "--operation",
        "Resize",
        "--width",
        "8",
        "--height",
        "4",
    ]);
    run_operation(&arguments).expect("Operation failed");
    assert!(result_path.exists(), "Output file was not created");
    let result = PixelImage::open(&result_path).expect("Reopening the result failed");
    assert_eq!(result.width(), 8, "result width does not match");
    assert_eq!(result.height(), 4, "result height does not match");
    let value = result.matrix()[0][0];
    assert!(
        (59..=61).contains(&value),
        "uniform value drifted to {}",
        value
    );
}
