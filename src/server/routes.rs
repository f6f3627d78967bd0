use crate::{
    models::{GeneratedImageRecord, Preset, PresetInfo},
    server::{page, AppState},
};
use actix_web::{http::header, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PromptForm {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct PresetForm {
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct StudioView {
    pub prompt: String,
    #[serde(rename = "isGenerating")]
    pub is_generating: bool,
    pub images: Vec<GeneratedImageRecord>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/prompt", web::post().to(set_prompt))
        .route("/preset", web::post().to(apply_preset))
        .route("/generate", web::post().to(generate))
        .route("/download/{created_at}", web::get().to(download))
        .service(
            web::scope("/api")
                .route("/presets", web::get().to(list_presets))
                .route("/images", web::get().to(list_images))
                .route("/state", web::get().to(studio_state)),
        );
}

fn back_to_page() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

async fn index(state: web::Data<AppState>) -> impl Responder {
    let html = page::render_page(&state.studio());
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

async fn set_prompt(state: web::Data<AppState>, form: web::Form<PromptForm>) -> impl Responder {
    state.studio().set_prompt_text(form.into_inner().prompt);
    back_to_page()
}

async fn apply_preset(state: web::Data<AppState>, form: web::Form<PresetForm>) -> impl Responder {
    match Preset::from_label(&form.label) {
        Some(preset) => state.studio().apply_preset(preset),
        None => log::warn!("Ignoring unknown preset label: {}", form.label),
    }
    back_to_page()
}

async fn generate(state: web::Data<AppState>, form: web::Form<PromptForm>) -> impl Responder {
    let mut studio = state.studio();
    studio.set_prompt_text(form.into_inner().prompt);
    if studio.generate().is_none() {
        log::debug!("Generate skipped: prompt is blank");
    }
    back_to_page()
}

async fn download(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let created_at = path.into_inner();
    // Copy the record out so the studio lock is released before the fetch.
    let record = state.studio().find_image(created_at).cloned();
    let Some(record) = record else {
        log::warn!("Download requested for unknown image {}", created_at);
        return back_to_page();
    };

    match state
        .downloader()
        .download(&record.url, &record.prompt)
        .await
    {
        Some(image) => HttpResponse::Ok()
            .content_type("image/png")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", image.file_name),
            ))
            .body(image.bytes),
        None => back_to_page(),
    }
}

async fn list_presets() -> impl Responder {
    let presets: Vec<PresetInfo> = Preset::ALL.into_iter().map(PresetInfo::from).collect();
    HttpResponse::Ok().json(presets)
}

async fn list_images(state: web::Data<AppState>) -> impl Responder {
    let images = state.studio().images().to_vec();
    HttpResponse::Ok().json(images)
}

async fn studio_state(state: web::Data<AppState>) -> impl Responder {
    let view = {
        let studio = state.studio();
        StudioView {
            prompt: studio.prompt_text().to_string(),
            is_generating: studio.is_generating(),
            images: studio.images().to_vec(),
        }
    };
    HttpResponse::Ok().json(view)
}
