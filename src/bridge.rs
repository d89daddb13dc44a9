/// JS bridge to the chrome.* extension APIs (see /extension.js)
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/extension.js")]
extern "C" {
    pub fn hasStorageApi() -> bool;

    pub fn hasTabsApi() -> bool;

    #[wasm_bindgen(catch)]
    pub async fn getStorage(keys: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    pub async fn setStorage(items: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    pub async fn removeStorage(keys: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    pub async fn createTab(url: &str) -> Result<(), JsValue>;

    /// Returns false when chrome.webRequest is not available
    pub fn addRequestErrorListener(callback: &Closure<dyn FnMut(JsValue)>) -> bool;

    /// Returns false when chrome.webNavigation is not available
    pub fn addNavigationErrorListener(callback: &Closure<dyn FnMut(JsValue)>) -> bool;

    pub fn addInstalledListener(callback: &Closure<dyn FnMut(JsValue)>);

    pub fn addStartupListener(callback: &Closure<dyn FnMut()>);
}
