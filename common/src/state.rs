//! アップロード画面の状態
//!
//! 1画面につき1つの UploadState が、選択中のファイル・プレビュー・
//! 解析結果・エラー・送信中フラグを持つ。
//!
//! プレビュー読み込みとAPIリクエストはどちらも非同期に完了するため、
//! 開始時にチケット（世代番号）を発行し、完了時に照合する。
//! リセットや再選択で世代が進むと、古い完了通知は捨てられる。

use crate::error::UploadError;
use crate::render::ResultView;
use crate::types::ParseLayoutResponse;

/// 画面状態（フィールドから導出する）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiStatus {
    Idle,
    Loading,
    Success,
    Error,
}

impl UiStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UiStatus::Idle => "idle",
            UiStatus::Loading => "loading",
            UiStatus::Success => "success",
            UiStatus::Error => "error",
        }
    }
}

/// 選択中のファイル
///
/// `payload` はWebでは `web_sys::File`、CLIではバイト列。
#[derive(Debug, Clone)]
pub struct SelectedFile<F> {
    pub payload: F,
    pub name: String,
    pub preview: Option<String>,
}

/// プレビュー読み込みのチケット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTicket(u64);

/// APIリクエストのチケット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// `submit()` が返す送信内容
#[derive(Debug, Clone)]
pub struct Submission<F> {
    pub ticket: RequestTicket,
    pub payload: F,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct UploadState<F> {
    selected: Option<SelectedFile<F>>,
    loading: bool,
    result: Option<ParseLayoutResponse>,
    error: Option<String>,
    selection_generation: u64,
    request_generation: u64,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            selected: None,
            loading: false,
            result: None,
            error: None,
            selection_generation: 0,
            request_generation: 0,
        }
    }
}

impl<F> UploadState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイルを選択
    ///
    /// 以前の結果・エラーを消し、送信中のリクエストがあれば無効にする。
    /// 返したチケットでプレビューを設定する。
    pub fn select_file(&mut self, payload: F, name: impl Into<String>) -> PreviewTicket {
        self.cancel_pending();
        self.selection_generation += 1;
        self.selected = Some(SelectedFile {
            payload,
            name: name.into(),
            preview: None,
        });
        self.result = None;
        self.error = None;
        PreviewTicket(self.selection_generation)
    }

    /// プレビューを設定（古いチケットなら無視して false）
    pub fn set_preview(&mut self, ticket: PreviewTicket, data_url: String) -> bool {
        if ticket.0 != self.selection_generation {
            log::debug!("discarding stale preview (ticket {})", ticket.0);
            return false;
        }
        match self.selected.as_mut() {
            Some(file) => {
                file.preview = Some(data_url);
                true
            }
            None => false,
        }
    }

    /// 解析リクエストを開始
    pub fn submit(&mut self) -> Result<Submission<F>, UploadError>
    where
        F: Clone,
    {
        if self.loading {
            return Err(UploadError::InFlight);
        }

        let Some(file) = self.selected.as_ref() else {
            let err = UploadError::NoFileSelected;
            self.result = None;
            self.error = Some(err.user_message());
            return Err(err);
        };

        let submission = Submission {
            ticket: RequestTicket(self.request_generation + 1),
            payload: file.payload.clone(),
            name: file.name.clone(),
        };
        self.request_generation += 1;
        self.loading = true;
        self.result = None;
        self.error = None;
        Ok(submission)
    }

    /// リクエストの結果を反映（古いチケットなら捨てて false）
    pub fn finish(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<ParseLayoutResponse, UploadError>,
    ) -> bool {
        if !self.loading || ticket.0 != self.request_generation {
            log::debug!("discarding stale layout response (ticket {})", ticket.0);
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(response) => {
                self.result = Some(response);
                self.error = None;
            }
            Err(err) => {
                self.result = None;
                self.error = Some(err.user_message());
            }
        }
        true
    }

    /// 初期状態に戻す
    pub fn reset(&mut self) {
        self.cancel_pending();
        self.selection_generation += 1;
        self.selected = None;
        self.result = None;
        self.error = None;
    }

    fn cancel_pending(&mut self) {
        if self.loading {
            self.loading = false;
            self.request_generation += 1;
        }
    }

    pub fn status(&self) -> UiStatus {
        if self.loading {
            UiStatus::Loading
        } else if self.error.is_some() {
            UiStatus::Error
        } else if self.result.is_some() {
            UiStatus::Success
        } else {
            UiStatus::Idle
        }
    }

    pub fn selected(&self) -> Option<&SelectedFile<F>> {
        self.selected.as_ref()
    }

    pub fn has_file(&self) -> bool {
        self.selected.is_some()
    }

    pub fn preview(&self) -> Option<&str> {
        self.selected.as_ref().and_then(|f| f.preview.as_deref())
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// 送信ボタンを押せるか
    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.loading
    }

    pub fn result(&self) -> Option<&ParseLayoutResponse> {
        self.result.as_ref()
    }

    pub fn result_view(&self) -> Option<ResultView> {
        self.result.as_ref().map(ResultView::from_response)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
