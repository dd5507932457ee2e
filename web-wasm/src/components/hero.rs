//! Hero section with the upload drop zone

use gloo::console;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileReader, HtmlInputElement};

use plantguard_common::{is_image_media_type, UploadedImage};

use crate::demo;

#[component]
pub fn HeroSection<F>(on_image: F) -> impl IntoView
where
    F: Fn(UploadedImage) + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_drop = {
        let on_image = on_image.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    if let Some(file) = files.get(0) {
                        if is_image_media_type(&file.type_()) {
                            read_file(file, on_image.clone());
                        } else {
                            console::debug!("ignoring non-image drop:", file.type_());
                        }
                    }
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
    };

    // Click-to-browse: a detached file input so the whole zone stays a div.
    let open_picker = {
        let on_image = on_image.clone();
        move || {
            let document = web_sys::window().unwrap().document().unwrap();
            let input: HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_accept("image/*");

            let picked = input.clone();
            let on_image = on_image.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(file) = picked.files().and_then(|files| files.get(0)) {
                    read_file(file, on_image.clone());
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    let on_zone_click = {
        let open_picker = open_picker.clone();
        move |_| open_picker()
    };
    let on_upload_click = {
        let open_picker = open_picker.clone();
        move |_| open_picker()
    };
    let on_demo_click = {
        let on_image = on_image.clone();
        move |_| on_image(demo::sample_image())
    };

    view! {
        <section class="hero">
            <div class="container">
                <span class="hero-badge">"✨ AI-Powered Plant Health Analysis"</span>

                <h1 class="hero-title">
                    "Protect Your Plants with "
                    <span class="accent">"Intelligent"</span>
                    " Disease Detection"
                </h1>

                <p class="hero-subtitle">
                    "Upload a photo of your plant and get instant analysis. Our AI identifies "
                    "diseases, provides treatment recommendations, and helps you keep your garden thriving."
                </p>

                <div
                    class=move || {
                        let mut classes = vec!["upload-area"];
                        if is_dragover.get() {
                            classes.push("dragover");
                        }
                        classes.join(" ")
                    }
                    on:drop=on_drop
                    on:dragover=on_dragover
                    on:dragleave=on_dragleave
                    on:click=on_zone_click
                >
                    <div class="upload-icon">"📷"</div>
                    <p class="upload-headline">"Drop your plant image here"</p>
                    <p class="text-muted">"or click to browse from your device"</p>
                    <p class="upload-formats">"🌿 Supports JPG, PNG, WEBP"</p>
                </div>

                <div class="hero-actions">
                    <button class="btn btn-primary" on:click=on_upload_click>
                        "Upload Plant Photo"
                    </button>
                    <button class="btn btn-secondary" on:click=on_demo_click>
                        "Try Demo"
                    </button>
                </div>
            </div>
        </section>
    }
}

fn read_file<F>(file: File, on_image: F)
where
    F: Fn(UploadedImage) + 'static,
{
    let file_name = file.name();
    let reader = FileReader::new().unwrap();

    let loaded = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = loaded.result() {
            if let Some(data_url) = result.as_string() {
                on_image(UploadedImage {
                    file_name: file_name.clone(),
                    data_url,
                });
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
