use super::{
    repository::KitsRepository,
    utils::{set_slot, ImageSlot, KitFormState},
};
use crate::{
    api::{ApiClient, ApiError, Kit, NewKit},
    state::message::MessageState,
    utils::files::read_file,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct KitSubmission {
    pub kit: NewKit,
    pub images: Vec<(ImageSlot, web_sys::File)>,
}

#[derive(Clone, Copy)]
pub struct KitsViewModel {
    pub kits_resource: Resource<u32, Result<Vec<Kit>, ApiError>>,
    pub reload: RwSignal<u32>,
    pub form: RwSignal<KitFormState>,
    pub images: RwSignal<Vec<(ImageSlot, web_sys::File)>>,
    pub modal_open: RwSignal<bool>,
    pub form_messages: RwSignal<MessageState>,
    pub create_action: Action<KitSubmission, Result<Kit, ApiError>>,
    pub pending_delete: RwSignal<Option<Kit>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
    pub delete_error: RwSignal<Option<ApiError>>,
}

impl KitsViewModel {
    pub fn open_modal(&self) {
        self.form.update(KitFormState::reset);
        self.images.set(Vec::new());
        self.form_messages.update(MessageState::clear);
        self.modal_open.set(true);
    }

    pub fn close_modal(&self) {
        self.modal_open.set(false);
    }

    pub fn set_image(&self, slot: ImageSlot, file: Option<web_sys::File>) {
        self.images.update(|images| set_slot(images, slot, file));
    }

    pub fn image_name(&self, slot: ImageSlot) -> Option<String> {
        self.images.with(|images| {
            images
                .iter()
                .find(|(existing, _)| *existing == slot)
                .map(|(_, file)| file.name())
        })
    }

    pub fn submit(&self) {
        match self.form.with_untracked(KitFormState::to_new_kit) {
            Ok(kit) => {
                self.form_messages.update(MessageState::clear);
                self.create_action.dispatch(KitSubmission {
                    kit,
                    images: self.images.get_untracked(),
                });
            }
            Err(msg) => self.form_messages.update(|m| m.set_error(msg)),
        }
    }

    pub fn request_delete(&self, kit: Kit) {
        self.delete_error.set(None);
        self.pending_delete.set(Some(kit));
    }

    pub fn confirm_delete(&self) {
        if let Some(kit) = self.pending_delete.get_untracked() {
            self.delete_action.dispatch(kit.id);
        }
    }
}

pub fn use_kits_view_model() -> KitsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = KitsRepository::new_with_client(Rc::new(api));
    let reload = create_rw_signal(0u32);

    let repo_list = repository.clone();
    let kits_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_list.clone();
            async move { repo.fetch_kits().await }
        },
    );

    let repo_create = repository.clone();
    let create_kit_action = create_action(move |submission: &KitSubmission| {
        let repo = repo_create.clone();
        let submission = submission.clone();
        async move {
            let mut picked = Vec::with_capacity(submission.images.len());
            for (slot, file) in submission.images {
                picked.push((slot, read_file(file).await?));
            }
            repo.create_kit(submission.kit, picked).await
        }
    });

    let repo_delete = repository;
    let delete_action = create_action(move |id: &String| {
        let repo = repo_delete.clone();
        let id = id.clone();
        async move { repo.delete_kit(id).await }
    });

    let vm = KitsViewModel {
        kits_resource,
        reload,
        form: create_rw_signal(KitFormState::default()),
        images: create_rw_signal(Vec::new()),
        modal_open: create_rw_signal(false),
        form_messages: create_rw_signal(MessageState::default()),
        create_action: create_kit_action,
        pending_delete: create_rw_signal(None),
        delete_action,
        delete_error: create_rw_signal(None),
    };

    create_effect(move |_| {
        if let Some(result) = create_kit_action.value().get() {
            match result {
                Ok(kit) => {
                    log::info!("kit {} created", kit.id);
                    vm.modal_open.set(false);
                    vm.form.update(KitFormState::reset);
                    vm.images.set(Vec::new());
                    reload.update(|value| *value = value.wrapping_add(1));
                }
                Err(err) => {
                    log::error!("kit creation failed: {}", err);
                    vm.form_messages
                        .update(|m| m.set_error(format!("Failed to add kit: {}", err.error)));
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => {
                    vm.pending_delete.set(None);
                    reload.update(|value| *value = value.wrapping_add(1));
                }
                Err(err) => vm.delete_error.set(Some(err)),
            }
        }
    });

    vm
}
