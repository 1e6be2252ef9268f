use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
};

use portfolio_comments_protocol::CommentQuery;

use crate::backend::CommentsView;
use crate::config::PageConfig;
use crate::error::{Result, UiError};
use crate::view::{CommentList, Node};

/// Handles to every element the widget touches, resolved once at startup
pub struct PageElements {
    pub document: Document,
    pub form: HtmlFormElement,
    pub max: Element,
    pub language: Element,
    pub container: Element,
    /// Optional; pages may call `deleteComments()` themselves instead
    pub delete_button: Option<Element>,
    hidden_class: String,
}

fn require(doc: &Document, id: &str) -> Result<Element> {
    doc.get_element_by_id(id)
        .ok_or_else(|| UiError::MissingElement(id.to_string()))
}

impl PageElements {
    pub fn resolve(document: Document, config: &PageConfig) -> Result<Self> {
        let ids = &config.ids;
        let form = require(&document, &ids.form)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| UiError::WrongElement(ids.form.clone()))?;
        let max = require(&document, &ids.max)?;
        let language = require(&document, &ids.language)?;
        let container = require(&document, &ids.container)?;
        let delete_button = document.get_element_by_id(&ids.delete_button);

        Ok(Self {
            document,
            form,
            max,
            language,
            container,
            delete_button,
            hidden_class: config.hidden_class.clone(),
        })
    }
}

impl CommentsView for PageElements {
    fn filters(&self) -> CommentQuery {
        CommentQuery::new(field_value(&self.max), field_value(&self.language))
    }

    fn reveal_upload_form(&self, action: &str) -> Result<()> {
        configure_upload_form(&self.form, action, &self.hidden_class)
    }

    fn show_comments(&self, list: &CommentList) -> Result<()> {
        mount_list(&self.document, &self.container, list)
    }
}

/// Current value of a form field (input, select or textarea)
pub fn field_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        el.get_attribute("value").unwrap_or_default()
    }
}

/// Point the form at the upload URL, then reveal it
///
/// The hidden class is removed last so the form is never visible with a
/// missing or stale action.
pub fn configure_upload_form(
    form: &HtmlFormElement,
    action: &str,
    hidden_class: &str,
) -> Result<()> {
    form.set_attribute("action", action)?;
    form.set_attribute("enctype", "multipart/form-data")?;
    form.class_list().remove_1(hidden_class)?;
    Ok(())
}

fn build_list(doc: &Document, list: &CommentList) -> Result<Element> {
    let ul = doc.create_element("ul")?;

    for item in &list.items {
        let li = doc.create_element("li")?;
        for node in &item.children {
            match node {
                Node::Text(text) => {
                    li.append_child(&doc.create_text_node(text))?;
                }
                Node::LineBreak => {
                    let br = doc.create_element("br")?;
                    li.append_child(&br)?;
                }
                Node::Image { src } => {
                    let img = doc.create_element("img")?;
                    img.set_attribute("src", src)?;
                    li.append_child(&img)?;
                }
            }
        }
        ul.append_child(&li)?;
    }

    Ok(ul)
}

/// Replace everything inside `container` with the rendered list
pub fn mount_list(doc: &Document, container: &Element, list: &CommentList) -> Result<()> {
    // Build first so the container is cleared and refilled in one task
    let ul = build_list(doc, list)?;
    container.set_inner_html("");
    container.append_child(&ul)?;
    Ok(())
}
