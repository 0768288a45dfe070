use crate::{
    api::{KitStatus, NewKit},
    utils::format::{non_blank, parse_amount},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    Hero,
    Detail1,
    Detail2,
}

impl ImageSlot {
    pub const ALL: [ImageSlot; 3] = [ImageSlot::Hero, ImageSlot::Detail1, ImageSlot::Detail2];

    pub fn label(&self) -> &'static str {
        match self {
            ImageSlot::Hero => "Hero Image",
            ImageSlot::Detail1 => "Detail 1",
            ImageSlot::Detail2 => "Detail 2",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KitFormState {
    pub name: String,
    pub deal_code: String,
    pub rental_price: String,
    pub rental_term: String,
    pub description: String,
    pub marketing_description: String,
}

impl KitFormState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Builds the insert payload; image URLs are filled in after upload.
    pub fn to_new_kit(&self) -> Result<NewKit, String> {
        let required = [
            (&self.name, "Kit name"),
            (&self.deal_code, "Deal code"),
            (&self.rental_price, "Rental price"),
            (&self.rental_term, "Rental term"),
            (&self.description, "Short description"),
        ];
        if let Some((_, label)) = required.iter().find(|(value, _)| value.trim().is_empty()) {
            return Err(format!("{} is required.", label));
        }
        let rental_price = parse_amount(&self.rental_price)
            .ok_or_else(|| "Rental price must be a non-negative number.".to_string())?;
        Ok(NewKit {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            marketing_description: non_blank(&self.marketing_description),
            deal_code: self.deal_code.trim().to_string(),
            rental_price,
            rental_term: self.rental_term.trim().to_string(),
            hero_image_url: None,
            detail1_image_url: None,
            detail2_image_url: None,
            status: KitStatus::Active,
        })
    }
}

pub fn attach_image_url(kit: &mut NewKit, slot: ImageSlot, url: String) {
    match slot {
        ImageSlot::Hero => kit.hero_image_url = Some(url),
        ImageSlot::Detail1 => kit.detail1_image_url = Some(url),
        ImageSlot::Detail2 => kit.detail2_image_url = Some(url),
    }
}

/// Replaces or clears the file held for `slot`.
pub fn set_slot<T>(items: &mut Vec<(ImageSlot, T)>, slot: ImageSlot, value: Option<T>) {
    items.retain(|(existing, _)| *existing != slot);
    if let Some(value) = value {
        items.push((slot, value));
    }
}

pub fn status_badge_class(status: KitStatus) -> &'static str {
    match status {
        KitStatus::Active => "border-green-800 text-green-400 bg-green-900/10",
        _ => "border-zinc-700 text-zinc-400 bg-zinc-900",
    }
}
