//! Embedded converter page
//!
//! A single HTML page served by the RPC server. Conversion is done by the
//! `convert` JSON-RPC method; clipboard and theme are handled in the browser.

const COPY_FEEDBACK_PLACEHOLDER: &str = "{{COPY_FEEDBACK_MS}}";

/// Converter HTML template with embedded CSS and JavaScript
pub const CONVERTER_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>TON Address Converter</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #f3f4f6;
            color: #111827;
            min-height: 100vh;
            padding: 32px 16px;
            transition: background 0.2s, color 0.2s;
        }
        body.dark { background: #111827; color: #f3f4f6; }
        .container { max-width: 768px; margin: 0 auto; }
        header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 32px; }
        h1 { font-size: 1.9rem; }
        h2 { font-size: 1.25rem; margin: 24px 0 16px; }
        .row { display: flex; }
        input {
            flex-grow: 1;
            padding: 8px 12px;
            border: 1px solid #d1d5db;
            border-radius: 6px 0 0 6px;
            background: #fff;
            color: inherit;
            font-family: monospace;
        }
        body.dark input { background: #1f2937; border-color: #374151; }
        button {
            padding: 8px 12px;
            border: none;
            background: #3b82f6;
            color: #fff;
            cursor: pointer;
            border-radius: 0 6px 6px 0;
            min-width: 72px;
        }
        button:hover { background: #2563eb; }
        #theme { border-radius: 6px; background: transparent; color: inherit; border: 1px solid #9ca3af; min-width: 0; }
        .error { margin-top: 8px; color: #ef4444; font-size: 0.9rem; min-height: 1.2em; }
        .card { background: #fff; border-radius: 8px; padding: 24px; margin-top: 24px; box-shadow: 0 1px 4px rgba(0,0,0,0.1); }
        body.dark .card { background: #1f2937; }
        .field { margin-bottom: 16px; }
        .field label { display: block; font-size: 0.85rem; margin-bottom: 4px; }
        .hidden { display: none; }
    </style>
</head>
<body>
    <div class="container">
        <header>
            <h1>TON Address Converter</h1>
            <button id="theme" title="Toggle theme">&#9790;</button>
        </header>
        <div class="row">
            <input id="address" autocomplete="off" placeholder="Enter TON address">
            <button id="paste">Paste</button>
        </div>
        <p class="error" id="error"></p>
        <div class="card hidden" id="formats">
            <div class="field"><label>HEX:</label><div class="row"><input readonly data-field="hex"><button data-copy="hex">Copy</button></div></div>
            <h2>Mainnet:</h2>
            <div class="field"><label>Bounceable:</label><div class="row"><input readonly data-field="mainnetBounceable"><button data-copy="mainnetBounceable">Copy</button></div></div>
            <div class="field"><label>Non-bounceable:</label><div class="row"><input readonly data-field="mainnetNonBounceable"><button data-copy="mainnetNonBounceable">Copy</button></div></div>
            <h2>Testnet:</h2>
            <div class="field"><label>Bounceable:</label><div class="row"><input readonly data-field="testnetBounceable"><button data-copy="testnetBounceable">Copy</button></div></div>
            <div class="field"><label>Non-bounceable:</label><div class="row"><input readonly data-field="testnetNonBounceable"><button data-copy="testnetNonBounceable">Copy</button></div></div>
        </div>
    </div>
    <script>
        const COPY_FEEDBACK_MS = {{COPY_FEEDBACK_MS}};
        const input = document.getElementById('address');
        const errorBox = document.getElementById('error');
        const card = document.getElementById('formats');
        let copiedTimer = null;
        let seq = 0;

        async function rpc(method, params, id) {
            const res = await fetch('/', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ jsonrpc: '2.0', method, params, id })
            });
            return res.json();
        }

        function flatten(f) {
            return {
                hex: f.hex,
                mainnetBounceable: f.mainnet.bounceable,
                mainnetNonBounceable: f.mainnet.nonBounceable,
                testnetBounceable: f.testnet.bounceable,
                testnetNonBounceable: f.testnet.nonBounceable
            };
        }

        async function convert(text) {
            const id = ++seq;
            const data = await rpc('convert', [text], id);
            // a newer keystroke already owns the output
            if (id !== seq) return;
            const result = data.result || { state: 'invalid', error: 'Invalid address format' };
            errorBox.textContent = result.error || '';
            if (result.state === 'converted') {
                const values = flatten(result.formats);
                document.querySelectorAll('[data-field]').forEach(el => {
                    el.value = values[el.dataset.field];
                });
                card.classList.remove('hidden');
            } else {
                card.classList.add('hidden');
            }
        }

        function markCopied(field) {
            document.querySelectorAll('[data-copy]').forEach(btn => {
                btn.textContent = btn.dataset.copy === field ? 'Copied' : 'Copy';
            });
            clearTimeout(copiedTimer);
            copiedTimer = setTimeout(() => markCopied(null), COPY_FEEDBACK_MS);
        }

        input.addEventListener('input', e => convert(e.target.value));

        document.getElementById('paste').addEventListener('click', async () => {
            try {
                const text = await navigator.clipboard.readText();
                input.value = text;
                convert(text);
            } catch (e) {
                console.warn('clipboard read failed', e);
            }
        });

        document.querySelectorAll('[data-copy]').forEach(btn => {
            btn.addEventListener('click', () => {
                const field = btn.dataset.copy;
                const value = document.querySelector(`[data-field="${field}"]`).value;
                navigator.clipboard.writeText(value).catch(e => console.warn('clipboard write failed', e));
                markCopied(field);
            });
        });

        const theme = document.getElementById('theme');
        if (localStorage.getItem('theme') === 'dark') document.body.classList.add('dark');
        theme.addEventListener('click', () => {
            const dark = document.body.classList.toggle('dark');
            localStorage.setItem('theme', dark ? 'dark' : 'light');
        });
    </script>
</body>
</html>
"#;

/// Render the page with the "Copied" label held for `copy_feedback_ms`
pub fn render_page(copy_feedback_ms: u64) -> String {
    CONVERTER_HTML.replace(COPY_FEEDBACK_PLACEHOLDER, &copy_feedback_ms.to_string())
}
