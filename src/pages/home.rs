use leptos::{html, prelude::*};

use crate::components::{ContactForm, ServiceCard, StatCounter, Tooltip};
use crate::config::use_settings;

struct Faq {
    question: &'static str,
    answer: &'static str,
}

const FAQS: [Faq; 3] = [
    Faq {
        question: "How soon will we see results?",
        answer: "Most clients see measurable traffic changes within the first eight weeks.",
    },
    Faq {
        question: "Do you work with small teams?",
        answer: "Yes. Engagements start with a single channel and grow with you.",
    },
    Faq {
        question: "Who owns the ad accounts?",
        answer: "You do. We work inside your accounts and hand over everything we build.",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let settings = use_settings();
    let page = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = page.get() {
                crate::services::enhance_region(&el, &settings);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (page, settings);
    });

    view! {
        <div class="home-page" node_ref=page>
            <section id="top" class="hero pt-32 pb-20 text-center">
                <h1 class="text-5xl font-bold mb-6" data-aos="fade-up">
                    "Growth marketing that "
                    <Tooltip text="Every campaign ships with a live dashboard">
                        <span class="underline decoration-dotted">"shows its work"</span>
                    </Tooltip>
                </h1>
                <p class="text-xl text-gray-600 max-w-2xl mx-auto mb-10" data-aos="fade-up">
                    "Search, social and content programs run by people who read the numbers."
                </p>
                <div class="cta-buttons flex justify-center gap-4" data-aos="fade-up">
                    <a href="#contact" class="btn btn-primary">"Get a Proposal"</a>
                    <a href="#services" class="btn btn-secondary">"What We Do"</a>
                </div>
                <img
                    src="../assets/img/team.svg"
                    alt="Our team at work"
                    loading="lazy"
                    class="mx-auto mt-16 max-w-3xl w-full"
                />
            </section>

            <section id="services" class="services py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl font-bold text-center mb-12" data-aos="fade-up">"Services"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                        <ServiceCard icon="🔍" title="Search">
                            "Technical SEO and paid search built around the queries that convert."
                        </ServiceCard>
                        <ServiceCard icon="📣" title="Social">
                            "Paid and organic social with creative tested every week."
                        </ServiceCard>
                        <ServiceCard icon="✍️" title="Content">
                            "Articles, landing pages and email that earn their keep."
                        </ServiceCard>
                    </div>
                </div>
            </section>

            <section class="stats py-20">
                <div class="container mx-auto px-4 grid grid-cols-1 md:grid-cols-3 gap-8">
                    <StatCounter target=250 label="Campaigns launched" suffix="+"/>
                    <StatCounter target=1200000 label="Monthly visitors driven"/>
                    <StatCounter target=98 label="Client retention" suffix="%"/>
                </div>
            </section>

            <section class="security-section py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl font-bold text-center mb-12">"Security & Auditing"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                        <div class="audit-card hover-lift transform-gpu rounded-xl bg-white p-6 shadow">
                            <h3 class="text-xl font-semibold mb-2">"Access reviews"</h3>
                            <p>"Quarterly reviews of who can touch your ad accounts and analytics."</p>
                        </div>
                        <div class="audit-card hover-glow transform-origin-center rounded-xl bg-white p-6 shadow">
                            <h3 class="text-xl font-semibold mb-2">"Tracking audits"</h3>
                            <p>"Consent-aware tagging checked against your privacy policy."</p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="faqs-section py-20">
                <div class="container mx-auto px-4 max-w-3xl">
                    <h2 class="title title-animation-line text-3xl font-bold text-center mb-12">
                        <span class="word">"Frequently"</span>
                        " "
                        <span class="word">"asked"</span>
                        " "
                        <span class="word">"questions"</span>
                    </h2>
                    {FAQS
                        .iter()
                        .map(|faq| {
                            view! {
                                <div class="accordion-card border-b py-4">
                                    <div class="flex justify-between items-center">
                                        <h3 class="line font-semibold">{faq.question}</h3>
                                        <span class="toggle-icon">"+"</span>
                                    </div>
                                    <div class="accordion-content mt-2 text-gray-600" style="display: none;">
                                        {faq.answer}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="contact" class="contact py-20 bg-gray-50">
                <div class="container mx-auto px-4 max-w-lg">
                    <h2 class="text-3xl font-bold text-center mb-8" data-aos="fade-up">"Start a Project"</h2>
                    <ContactForm/>
                </div>
            </section>
        </div>
    }
}
