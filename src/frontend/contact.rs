use yew::prelude::*;

use showcase::site::Contact;

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub contact: Contact,
    /// Target of the header's "Get in touch" button.
    pub anchor: NodeRef,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let contact = &props.contact;

    html! {
        <section ref={props.anchor.clone()} class="contact-section snap-start" aria-labelledby="contact-heading">
            <h2 id="contact-heading">{contact.headline.clone()}</h2>
            <a class="contact-email" href={contact.mailto_href()}>{contact.email.clone()}</a>
            <ul class="contact-socials">
                { for contact.socials.iter().map(|social| html! {
                    <li key={social.label.clone()}>
                        <a href={social.href.clone()} target="_blank" rel="noopener noreferrer">
                            {social.label.clone()}
                        </a>
                    </li>
                }) }
            </ul>
        </section>
    }
}
