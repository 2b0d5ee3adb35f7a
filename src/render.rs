//! DOM for the landing page: built once at mount, then updated in place from
//! each composed [`Scene`].

use folio_core::constants::{BLOB_COUNT, FOLLOWER_SIZE_PX};
use folio_core::{HeroName, Scene};
use web_sys as web;

use crate::constants::*;
use crate::dom::{append_element, set_style, set_text, set_visible, toggle_class};

/// Hover-animated name: glow, floating emoji, outline and the text itself.
pub struct NameNodes {
    pub root: web::Element,
    glow: web::Element,
    emoji: web::Element,
    text: web::Element,
    outline: web::Element,
}

impl NameNodes {
    fn build(document: &web::Document, parent: &web::Element) -> anyhow::Result<Self> {
        let root = append_element(document, parent, "span", Some(NAME_CLASS))?;
        let glow = append_element(
            document,
            &root,
            "span",
            Some("absolute inset-0 blur-xl bg-blue-400 dark:bg-blue-600 opacity-50 animate-pulse"),
        )?;
        _ = glow.set_attribute("aria-hidden", "true");
        let emoji = append_element(
            document,
            &root,
            "span",
            Some("absolute left-1/2 -translate-x-1/2 animate-floatUp pointer-events-none select-none"),
        )?;
        _ = emoji.set_attribute("aria-hidden", "true");
        set_style(&emoji, "font-size:1.5em");
        set_text(&emoji, HOVER_EMOJI);
        let text = append_element(document, &root, "span", Some("relative"))?;
        let outline = append_element(
            document,
            &root,
            "span",
            Some(
                "absolute -inset-1 bg-gradient-to-r from-blue-600 to-blue-400 \
                 dark:from-blue-400 dark:to-blue-600 opacity-20 rounded-lg blur-sm",
            ),
        )?;
        _ = outline.set_attribute("aria-hidden", "true");
        Ok(Self {
            root,
            glow,
            emoji,
            text,
            outline,
        })
    }

    fn apply(&self, text: &str, hovered: bool) {
        set_text(&self.text, text);
        set_visible(&self.glow, hovered);
        set_visible(&self.emoji, hovered);
        set_visible(&self.outline, hovered);
        toggle_class(&self.root, NAME_HOVER_CLASS, hovered);
    }
}

pub struct Nodes {
    pub section: web::Element,
    texture: web::Element,
    blobs: Vec<web::Element>,
    follower: web::Element,
    pub logo_link: web::Element,
    logo_glow: web::Element,
    logo_img: web::Element,
    greeting: web::Element,
    pub name: NameNodes,
    nickname: web::Element,
    pub nickname_value: NameNodes,
    description: web::Element,
    projects: web::Element,
    about: web::Element,
    pub language_button: web::Element,
    pub theme_button: web::Element,
}

impl Nodes {
    pub fn build(document: &web::Document, root: &web::Element) -> anyhow::Result<Self> {
        let section = append_element(document, root, "div", Some(SECTION_CLASS))?;
        _ = section.set_attribute("id", SECTION_ID);

        let follower = append_element(document, &section, "div", None)?;
        _ = follower.set_attribute("aria-hidden", "true");

        // Background: texture, blobs, keyframes
        let background = append_element(document, &section, "div", Some("fixed inset-0"))?;
        set_style(
            &background,
            &format!("position:fixed;inset:0;z-index:{BACKGROUND_Z_INDEX}"),
        );
        let texture = append_element(document, &background, "div", Some("absolute inset-0"))?;
        let blobs = (0..BLOB_COUNT)
            .map(|_| append_element(document, &background, "div", None))
            .collect::<anyhow::Result<Vec<_>>>()?;
        let keyframes = append_element(document, &background, "style", None)?;
        set_text(&keyframes, KEYFRAMES_CSS);

        // Logo
        let logo_box = append_element(document, &section, "div", Some("absolute top-6 left-6 z-20"))?;
        set_style(&logo_box, &format!("z-index:{LOGO_Z_INDEX}"));
        let logo_link = append_element(document, &logo_box, "a", Some("flex items-center space-x-2"))?;
        let logo_inner = append_element(document, &logo_link, "div", Some("relative"))?;
        let logo_glow = append_element(
            document,
            &logo_inner,
            "div",
            Some("absolute rounded-full blur-xl transition-colors duration-300"),
        )?;
        set_style(
            &logo_glow,
            &format!(
                "background-color:rgba(255, 255, 255, 0.5);width:{0}px;height:{0}px;\
                 left:50%;top:50%;transform:translate(-55%, -50%)",
                LOGO_GLOW_SIZE_PX
            ),
        );
        let logo_img = append_element(
            document,
            &logo_inner,
            "img",
            Some("w-12 h-12 object-contain hover:scale-110 transition-transform duration-300 relative z-10"),
        )?;
        _ = logo_img.set_attribute("src", LOGO_SRC);

        // Hero
        let content = append_element(document, &section, "div", Some(CONTENT_CLASS))?;
        set_style(&content, &format!("z-index:{CONTENT_Z_INDEX}"));
        let h1 = append_element(document, &content, "h1", Some(HEADING_CLASS))?;
        let greeting = append_element(document, &h1, "span", None)?;
        let name = NameNodes::build(document, &h1)?;
        let h2 = append_element(document, &content, "h2", Some(SUBHEADING_CLASS))?;
        let nickname = append_element(document, &h2, "span", None)?;
        let nickname_value = NameNodes::build(document, &h2)?;
        let description = append_element(document, &content, "p", Some(DESCRIPTION_CLASS))?;
        let links = append_element(document, &content, "div", Some(LINK_ROW_CLASS))?;
        let projects = append_element(document, &links, "a", Some(LINK_CLASS))?;
        _ = projects.set_attribute("href", "#projects");
        let about = append_element(document, &links, "a", Some(LINK_CLASS))?;
        _ = about.set_attribute("href", "#about");

        // Top-right menu
        let menu = append_element(document, &section, "div", Some(MENU_CLASS))?;
        let language_button = append_element(document, &menu, "button", Some(MENU_BUTTON_CLASS))?;
        _ = language_button.set_attribute("id", LANGUAGE_BUTTON_ID);
        _ = language_button.set_attribute("aria-label", "Toggle language");
        let theme_button = append_element(document, &menu, "button", Some(MENU_BUTTON_CLASS))?;
        _ = theme_button.set_attribute("id", THEME_BUTTON_ID);
        _ = theme_button.set_attribute("aria-label", "Toggle dark mode");
        let menu_button = append_element(document, &menu, "button", Some(MENU_BUTTON_CLASS))?;
        set_text(&menu_button, "☰");

        Ok(Self {
            section,
            texture,
            blobs,
            follower,
            logo_link,
            logo_glow,
            logo_img,
            greeting,
            name,
            nickname,
            nickname_value,
            description,
            projects,
            about,
            language_button,
            theme_button,
        })
    }

    pub fn apply(&self, document: &web::Document, scene: &Scene) {
        if let Some(html) = document.document_element() {
            toggle_class(&html, DARK_CLASS, scene.dark_mode);
            _ = html.set_attribute("lang", scene.locale.code());
        }

        set_style(
            &self.texture,
            &format!(
                "background-image:{};z-index:0",
                scene.texture.background_image()
            ),
        );
        for (el, blob) in self.blobs.iter().zip(scene.blobs.iter()) {
            set_style(el, &blob.style());
        }

        set_style(
            &self.follower,
            &format!(
                "position:fixed;left:0;top:0;width:{0}px;height:{0}px;border-radius:50%;\
                 background:{1};pointer-events:none;z-index:{2};transform:{3}",
                FOLLOWER_SIZE_PX,
                scene.follower.color(),
                FOLLOWER_Z_INDEX,
                scene.follower.transform()
            ),
        );

        _ = self.logo_link.set_attribute("href", scene.logo.href);
        set_visible(&self.logo_glow, scene.logo.glow);
        _ = self.logo_img.set_attribute("alt", scene.logo.alt);

        let hero = &scene.hero;
        set_text(&self.greeting, &format!("{} ", hero.text.greeting));
        self.name.apply(hero.text.name, hero.is_hovered(HeroName::Name));
        set_text(&self.nickname, &format!("{} ", hero.text.nickname));
        self.nickname_value
            .apply(hero.text.nickname_value, hero.is_hovered(HeroName::Nickname));
        set_text(&self.description, hero.text.description);
        set_text(&self.projects, hero.text.projects);
        set_text(&self.about, hero.text.about);
        set_text(&self.language_button, hero.text.language);
        set_text(&self.theme_button, hero.theme_icon);
    }

    /// Detach everything created by [`Nodes::build`].
    pub fn remove(&self) {
        self.section.remove();
    }
}
