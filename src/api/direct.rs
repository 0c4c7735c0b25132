//
//  instaapi
//  api/direct.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct thread flags.
//!
//! Starring a thread labels it (`thread_label=1`); unstarring removes the
//! label. Both endpoints answer with the plain status envelope and succeed
//! only on `"status": "ok"`.

use reqwest::Method;

use super::client::InstaClient;
use super::common::ApiResult;

/// Handle for direct thread operations, borrowed from an [`InstaClient`].
pub struct DirectApi<'a> {
    client: &'a InstaClient,
}

impl<'a> DirectApi<'a> {
    pub(crate) fn new(client: &'a InstaClient) -> Self {
        Self { client }
    }

    /// Stars (labels) a direct thread.
    ///
    /// # Errors
    ///
    /// - [`ApiError::AuthRequired`](super::ApiError::AuthRequired) without a
    ///   logged-in session
    /// - [`ApiError::UnexpectedResponse`](super::ApiError::UnexpectedResponse)
    ///   on a non-2xx status or a payload status other than `ok`
    pub async fn star_thread(&self, thread_id: &str) -> ApiResult<bool> {
        self.client
            .logged("star_thread", self.set_label(thread_id, true))
            .await
    }

    /// Unstars a direct thread. Errors as for [`star_thread`](Self::star_thread).
    pub async fn unstar_thread(&self, thread_id: &str) -> ApiResult<bool> {
        self.client
            .logged("unstar_thread", self.set_label(thread_id, false))
            .await
    }

    async fn set_label(&self, thread_id: &str, starred: bool) -> ApiResult<bool> {
        self.client.require_user()?;

        let uris = self.client.uris();
        let url = if starred {
            uris.star_thread(thread_id)?
        } else {
            uris.unstar_thread(thread_id)?
        };

        let mut form = Vec::with_capacity(3);
        if starred {
            form.push(("thread_label", "1".to_string()));
        }
        form.push(("_csrftoken", self.client.session().csrf_token.clone()));
        form.push(("_uuid", self.client.device_guid()));

        let request = self.client.request(Method::POST, url).form(&form);
        let response = self.client.execute(request).await?.ensure_success()?;
        response.require_ok()?;
        Ok(true)
    }
}
