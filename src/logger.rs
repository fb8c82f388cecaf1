use crate::pixel::PixelImage;

#[ctor::ctor]
fn init() {
    use log4rs;
    log4rs::init_file("log4rs.yaml", Default::default()).unwrap();
}

pub fn log_image(label: &str, image: &PixelImage) {
    log::info!(
        "{}: {}x{} pixels with {} channels",
        label,
        image.width(),
        image.height(),
        image.channels()
    );
}
