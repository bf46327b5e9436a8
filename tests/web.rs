#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{Clamped, JsCast};
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use wave_wasm::wasm::render::wave_image_js;
use wave_wasm::wasm::{add_wavable_image, supports_canvas, wave_image};
use wave_wasm::{ImageOptions, WaveError, WaveOptions};

wasm_bindgen_test_configure!(run_in_browser);

fn canvas(id: &str, width: u32, height: u32) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_id(id);
    canvas.set_width(width);
    canvas.set_height(height);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn context(canvas: &HtmlCanvasElement) -> CanvasRenderingContext2d {
    canvas.get_context("2d").unwrap().unwrap().dyn_into().unwrap()
}

async fn sleep(ms: i32) {
    let done = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(done).await.unwrap();
}

#[wasm_bindgen_test]
fn browser_supports_canvas() {
    assert!(supports_canvas());
}

#[wasm_bindgen_test]
fn wave_image_starts_and_cancels() {
    let canvas = canvas("wave-start", 32, 24);
    let mut handle = wave_image(WaveOptions::new(canvas)).unwrap();
    assert!(handle.is_running());
    handle.cancel();
    assert!(!handle.is_running());
    handle.cancel();
}

#[wasm_bindgen_test(async)]
async fn zero_amplitude_tick_leaves_pixels_unchanged() {
    let canvas = canvas("wave-flat", 16, 8);
    let ctx = context(&canvas);
    let mut opaque: Vec<u8> = (0..16 * 8 * 4).map(|i| (i % 251) as u8).collect();
    for px in opaque.chunks_exact_mut(4) {
        px[3] = 255;
    }
    let data = ImageData::new_with_u8_clamped_array_and_sh(Clamped(&opaque), 16, 8).unwrap();
    ctx.put_image_data(&data, 0.0, 0.0).unwrap();

    let options = WaveOptions {
        amplitude: Some(0.0),
        fps: Some(1000.0),
        ..WaveOptions::new(canvas.clone())
    };
    let handle = wave_image(options).unwrap();
    sleep(50).await;
    let after = ctx.get_image_data(0.0, 0.0, 16.0, 8.0).unwrap().data().0;
    drop(handle);
    assert_eq!(after, opaque);
}

#[wasm_bindgen_test]
fn js_wave_image_reads_canvas_from_options() {
    let missing = js_sys::Object::new();
    let err = wave_image_js(&missing).err().unwrap();
    assert!(err.is_instance_of::<js_sys::ReferenceError>());

    let options = js_sys::Object::new();
    let canvas = canvas("wave-js", 20, 10);
    js_sys::Reflect::set(&options, &"canvas".into(), &canvas).unwrap();
    js_sys::Reflect::set(&options, &"vertical-wave".into(), &true.into()).unwrap();
    let mut handle = wave_image_js(&options).unwrap();
    assert!(handle.is_running());
    handle.cancel();
}

#[wasm_bindgen_test]
fn missing_image_src_fails_before_loading() {
    let options = ImageOptions {
        target_id: Some("x".into()),
        ..ImageOptions::default()
    };
    assert_eq!(
        add_wavable_image(options).err(),
        Some(WaveError::MissingOption("image_src"))
    );
}

#[wasm_bindgen_test(async)]
async fn unloadable_image_is_reported() {
    canvas("wave-broken", 4, 4);
    let pending = add_wavable_image(ImageOptions::new("/does-not-exist.png", "wave-broken")).unwrap();
    match pending.await {
        Err(WaveError::ImageLoad(src)) => assert_eq!(src, "/does-not-exist.png"),
        Err(e) => panic!("unexpected error {e}"),
        Ok(_) => panic!("image should not load"),
    }
}
