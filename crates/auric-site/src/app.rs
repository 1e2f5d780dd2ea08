//! Application root and route table

use auric_core::routes;
use leptos::*;
use leptos_router::*;

use crate::components::*;
use crate::context::provide_viewport_context;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_viewport_context();

    view! {
        <link rel="stylesheet" href="/pkg/auric-site.css"/>
        <link rel="icon" type="image/svg+xml" href="/assets/favicon.svg"/>
        <Router>
            <ScrollToTop/>
            <div class="site">
                <SiteNav/>
                <main>
                    <Routes>
                        <Route path=routes::HOME view=HomePage/>
                        <Route path=routes::ABOUT view=AboutPage/>
                        <Route path=routes::MANUFACTURE view=ManufacturePage/>
                        <Route path="/products/:slug" view=ProductPage/>
                        <Route path=routes::QUALITY_CONTROL view=QualityPage/>
                        <Route path=routes::MANUFACTURING_CAPACITY view=CapacityPage/>
                        <Route path=routes::CONTACT view=ContactPage/>
                        <Route path=routes::INVESTOR view=InvestorPage/>
                        <Route path=routes::FINANCIALS view=FinancialsPage/>
                        <Route path=routes::SHAREHOLDING view=ShareholdingPage/>
                        <Route path="/*any" view=NotFound/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
